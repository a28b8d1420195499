// Error popup component - 다이얼로그 내부 에러 팝업
//
// 열려 있는 동안 모든 키 입력을 가져가며, Enter/Esc/Space로 닫힌다.

use crate::ui::components::widget::{clip_to_buffer, DialogWidget, WidgetAction};
use crate::ui::layout::{resolve, Rectangle, WidgetRole};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const DISMISS_HINT: &str = "Press Enter or Esc to continue";

/// 차단형 에러 팝업
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPopup {
    title: String,
    message: String,
    required_fields: Vec<String>,
}

impl ErrorPopup {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            required_fields: Vec::new(),
        }
    }

    /// 제출 검증 실패 팝업
    pub fn unmet_requirements(required_fields: Vec<String>) -> Self {
        Self {
            title: "Invalid submission".to_string(),
            message: "Required fields are not filled in.".to_string(),
            required_fields,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }
}

impl DialogWidget for ErrorPopup {
    fn area(&self, parent: Rectangle) -> Rectangle {
        resolve(WidgetRole::ErrorPopup, parent)
    }

    fn handle_key(&mut self, key: KeyEvent, _parent: Rectangle) -> WidgetAction {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => WidgetAction::Dismiss,
            // 팝업이 떠 있는 동안 다른 키는 삼킨다
            _ => WidgetAction::Handled,
        }
    }

    fn handle_press(&mut self, _x: i32, _y: i32, _parent: Rectangle) -> WidgetAction {
        WidgetAction::Handled
    }

    fn render(&self, parent: Rectangle, buf: &mut Buffer, theme: &Theme, _focused: bool) {
        let Some(rect) = clip_to_buffer(self.area(parent), buf) else {
            return;
        };

        Clear.render(rect, buf);
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(
                Style::default()
                    .fg(theme.error_fg.to_color())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error_border.to_color()))
            .style(Style::default().bg(theme.bg.to_color()));

        let mut lines = vec![Line::styled(
            self.message.clone(),
            Style::default().fg(theme.fg.to_color()),
        )];
        if !self.required_fields.is_empty() {
            lines.push(Line::styled(
                format!("Required fields: {}", self.required_fields.join(", ")),
                Style::default().fg(theme.error_fg.to_color()),
            ));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            DISMISS_HINT,
            Style::default().fg(theme.hint.to_color()),
        ));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(rect, buf);
    }
}

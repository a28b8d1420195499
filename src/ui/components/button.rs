// Button component - 다이얼로그 명령 버튼

use crate::ui::components::widget::{clip_to_buffer, DialogWidget, WidgetAction};
use crate::ui::layout::{resolve, Rectangle, WidgetRole};
use crate::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 버튼 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Submit,
    Cancel,
}

impl ButtonRole {
    fn widget_role(self) -> WidgetRole {
        match self {
            ButtonRole::Submit => WidgetRole::SubmitButton,
            ButtonRole::Cancel => WidgetRole::CancelButton,
        }
    }
}

/// 명령 버튼
///
/// 눌리면 `WidgetAction::Activate`만 돌려준다. 실제 명령은 다이얼로그가 실행한다.
#[derive(Debug, Clone)]
pub struct Button {
    role: ButtonRole,
    label: String,
}

impl Button {
    pub fn new(role: ButtonRole, label: impl Into<String>) -> Self {
        Self {
            role,
            label: label.into(),
        }
    }

    pub fn role(&self) -> ButtonRole {
        self.role
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl DialogWidget for Button {
    fn area(&self, parent: Rectangle) -> Rectangle {
        resolve(self.role.widget_role(), parent)
    }

    // 버튼은 포커스 링에 들어가지 않으므로 키 입력을 받지 않는다
    fn handle_key(&mut self, _key: KeyEvent, _parent: Rectangle) -> WidgetAction {
        WidgetAction::Ignored
    }

    fn handle_press(&mut self, x: i32, y: i32, parent: Rectangle) -> WidgetAction {
        if self.contains(x, y, parent) {
            WidgetAction::Activate
        } else {
            WidgetAction::Ignored
        }
    }

    fn render(&self, parent: Rectangle, buf: &mut Buffer, theme: &Theme, focused: bool) {
        let Some(rect) = clip_to_buffer(self.area(parent), buf) else {
            return;
        };

        let style = Style::default()
            .fg(theme.button_fg.to_color())
            .bg(theme.button_bg.to_color());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border.to_color()))
            .style(style);
        let inner = block.inner(rect);
        block.render(rect, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let label_style = if focused {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style
        };

        // 가운데 정렬
        let label_width = self.label.width() as u16;
        let x = inner.x + inner.width.saturating_sub(label_width) / 2;
        let y = inner.y + inner.height / 2;
        buf.set_stringn(x, y, &self.label, inner.width as usize, label_style);
    }
}

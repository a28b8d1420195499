// Name field component - 이름/경로 입력 필드

use crate::models::text_cursor::TextCursor;
use crate::ui::components::widget::{clip_to_buffer, DialogWidget, WidgetAction};
use crate::ui::layout::{resolve, Rectangle, WidgetRole};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Position,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// 한 줄 입력 필드
///
/// 검증은 하지 않는다. 값의 의미는 다이얼로그가 판단한다.
#[derive(Debug, Clone)]
pub struct NameField {
    title: String,
    cursor: TextCursor,
}

impl NameField {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cursor: TextCursor::new(),
        }
    }

    /// 현재 입력값
    pub fn value(&self) -> &str {
        self.cursor.value()
    }

    /// 입력값 교체 (커서는 끝으로)
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.cursor.set_text(value);
    }

    pub fn cursor(&self) -> &TextCursor {
        &self.cursor
    }

    /// 텍스트 창 표시 열 수 (테두리 두 칸 + 끝 커서 한 칸 제외)
    pub fn viewport_width(area: Rectangle) -> usize {
        (area.width() - 3).max(0) as usize
    }

    /// 터미널 커서 위치 (호스트가 실제 커서를 옮길 때 사용)
    pub fn cursor_position(&self, parent: Rectangle) -> Option<Position> {
        let area = self.area(parent);
        let rect = area.to_rect()?;
        if rect.width < 3 || rect.height < 3 {
            return None;
        }

        let window = self.cursor.window(Self::viewport_width(area));
        Some(Position {
            x: rect.x + 1 + window.cursor_col as u16,
            y: rect.y + 1,
        })
    }
}

impl DialogWidget for NameField {
    fn area(&self, parent: Rectangle) -> Rectangle {
        resolve(WidgetRole::NameField, parent)
    }

    fn handle_key(&mut self, key: KeyEvent, _parent: Rectangle) -> WidgetAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Left => self.cursor.move_left(),
            KeyCode::Right => self.cursor.move_right(),
            KeyCode::Home => self.cursor.jump_to_start(),
            KeyCode::End => self.cursor.jump_to_end(),
            KeyCode::Backspace => self.cursor.erase_before_cursor(),
            KeyCode::Delete => self.cursor.delete_at_cursor(),
            KeyCode::Char('w') if ctrl => self.cursor.delete_prev_word(),
            KeyCode::Char(c) if !ctrl && !alt && !c.is_control() => self.cursor.insert(c),
            _ => return WidgetAction::Ignored,
        }
        WidgetAction::Handled
    }

    fn handle_press(&mut self, x: i32, y: i32, parent: Rectangle) -> WidgetAction {
        let area = self.area(parent);
        if !area.contains(x, y) {
            return WidgetAction::Ignored;
        }

        // 클릭한 표시 열에 해당하는 문자 위치로 커서 이동
        let col = (x - area.start_x - 1).max(0) as usize;
        let index = self
            .cursor
            .window(Self::viewport_width(area))
            .char_index_at(col);
        self.cursor.set_cursor(index);
        WidgetAction::Handled
    }

    fn render(&self, parent: Rectangle, buf: &mut Buffer, theme: &Theme, focused: bool) {
        let area = self.area(parent);
        let Some(rect) = clip_to_buffer(area, buf) else {
            return;
        };

        let (border_color, title_style) = if focused {
            (
                theme.border_focused.to_color(),
                Style::default()
                    .fg(theme.title.to_color())
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (theme.border.to_color(), Style::default().fg(theme.fg.to_color()))
        };
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.input_bg.to_color()));
        let inner = block.inner(rect);
        block.render(rect, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let window = self.cursor.window(Self::viewport_width(area));
        let text_style = Style::default()
            .fg(theme.fg.to_color())
            .bg(theme.input_bg.to_color());
        buf.set_stringn(inner.x, inner.y, window.text, inner.width as usize, text_style);

        // 커서 표시 (반전)
        if focused {
            let cursor_x = inner.x + window.cursor_col as u16;
            if cursor_x < inner.right() {
                if let Some(cell) = buf.cell_mut((cursor_x, inner.y)) {
                    cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
                }
            }
        }
    }
}

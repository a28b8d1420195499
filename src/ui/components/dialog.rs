//! 파일 선택 다이얼로그
//!
//! 선택기, 이름 필드, 버튼, 에러 팝업을 소유하고 키/포인터 입력을 상태에 따라
//! 하위 위젯에 분배한다. 제출이 성공하면 콜백을 한 번 호출하고 닫힌다.

use crate::models::entry::{IconStyle, SelectionMode};
use crate::models::focus::{FocusCoordinator, FocusTarget};
use crate::models::submission::{compose_path, unmet_requirements, Requirement};
use crate::system::filesystem::DirectorySource;
use crate::ui::components::button::{Button, ButtonRole};
use crate::ui::components::error_popup::ErrorPopup;
use crate::ui::components::name_field::NameField;
use crate::ui::components::selector::{Activation, FileSelector};
use crate::ui::components::widget::{clip_to_buffer, DialogWidget, WidgetAction};
use crate::ui::layout::{dialog_area, resolve, Rectangle, WidgetRole};
use crate::ui::theme::Theme;
use crate::utils::error::Result;
use crate::utils::path_display::fit_path;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Widget},
};
use std::fmt;
use std::path::{Path, PathBuf};

const KEY_HINTS: &str = " Tab: switch  Enter: open/submit  Esc: cancel ";

/// 다이얼로그 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// 선택기에 포커스
    Navigating,
    /// 이름 필드에 포커스
    EditingName,
    /// 에러 팝업 표시 중
    ErrorShown,
    /// 제출 또는 취소로 종료됨
    Closed,
}

/// 다이얼로그 생성 옵션
#[derive(Debug, Clone)]
pub struct DialogOptions {
    pub initial_dir: PathBuf,
    pub mode: SelectionMode,
    pub icon_style: IconStyle,
    pub allowed_extensions: Vec<String>,
    pub show_hidden: bool,
    pub requirements: Vec<Requirement>,
    pub show_buttons: bool,
    /// 이름 필드 제목
    pub field_title: String,
}

impl DialogOptions {
    pub fn new(initial_dir: impl Into<PathBuf>) -> Self {
        Self {
            initial_dir: initial_dir.into(),
            mode: SelectionMode::default(),
            icon_style: IconStyle::default(),
            allowed_extensions: Vec::new(),
            show_hidden: true,
            requirements: vec![Requirement::NonEmptyName],
            show_buttons: false,
            field_title: "Path".to_string(),
        }
    }

    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn icon_style(mut self, icon_style: IconStyle) -> Self {
        self.icon_style = icon_style;
        self
    }

    pub fn allowed_extensions(mut self, extensions: Vec<String>) -> Self {
        self.allowed_extensions = extensions;
        self
    }

    pub fn show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    pub fn requirements(mut self, requirements: Vec<Requirement>) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn show_buttons(mut self, show: bool) -> Self {
        self.show_buttons = show;
        self
    }
}

type SubmitCallback = Box<dyn FnOnce(PathBuf)>;

/// 파일 선택 다이얼로그
pub struct FileDialog<S: DirectorySource> {
    source: S,
    state: DialogState,
    /// 에러 팝업이 닫히면 돌아갈 상태
    resume_state: DialogState,
    mode: SelectionMode,
    focus: FocusCoordinator,
    selector: FileSelector,
    name_field: NameField,
    submit_button: Button,
    cancel_button: Button,
    error_popup: Option<ErrorPopup>,
    requirements: Vec<Requirement>,
    show_buttons: bool,
    root: Rect,
    on_submit: Option<SubmitCallback>,
    submitted: Option<PathBuf>,
}

impl<S: DirectorySource> fmt::Debug for FileDialog<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileDialog")
            .field("state", &self.state)
            .field("current_dir", &self.selector.current_dir())
            .field("name", &self.name_field.value())
            .field("submitted", &self.submitted)
            .finish_non_exhaustive()
    }
}

impl<S: DirectorySource> FileDialog<S> {
    /// 다이얼로그 생성
    ///
    /// 초기 디렉토리를 열 수 없으면 에러를 돌려준다. 이 에러만 다이얼로그 밖으로 나간다.
    pub fn new(
        options: DialogOptions,
        source: S,
        on_submit: impl FnOnce(PathBuf) + 'static,
    ) -> Result<Self> {
        let mut selector = FileSelector::new(options.mode, options.icon_style)
            .allowed_extensions(&options.allowed_extensions)
            .show_hidden(options.show_hidden);
        selector.open(&options.initial_dir, &source)?;

        tracing::debug!(
            "Dialog created at {:?} (mode: {:?})",
            selector.current_dir(),
            options.mode
        );

        Ok(Self {
            source,
            state: DialogState::Navigating,
            resume_state: DialogState::Navigating,
            mode: options.mode,
            focus: FocusCoordinator::new(vec![FocusTarget::Selector, FocusTarget::NameField]),
            selector,
            name_field: NameField::new(options.field_title),
            submit_button: Button::new(ButtonRole::Submit, "Submit"),
            cancel_button: Button::new(ButtonRole::Cancel, "Cancel"),
            error_popup: None,
            requirements: options.requirements,
            show_buttons: options.show_buttons,
            root: Rect::default(),
            on_submit: Some(Box::new(on_submit)),
            submitted: None,
        })
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == DialogState::Closed
    }

    /// 제출된 경로 (제출 전이나 취소 시 `None`)
    pub fn submitted_path(&self) -> Option<&Path> {
        self.submitted.as_deref()
    }

    pub fn current_dir(&self) -> &Path {
        self.selector.current_dir()
    }

    pub fn selector(&self) -> &FileSelector {
        &self.selector
    }

    pub fn name_field(&self) -> &NameField {
        &self.name_field
    }

    pub fn error_popup(&self) -> Option<&ErrorPopup> {
        self.error_popup.as_ref()
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus.current()
    }

    /// 루트(터미널) 영역 갱신. 하위 영역은 다음 호출에서 다시 계산된다.
    pub fn resize(&mut self, root: Rect) {
        self.root = root;
    }

    /// 현재 다이얼로그 영역
    pub fn area(&self) -> Rectangle {
        dialog_area(self.root)
    }

    /// 키 입력 처리 후 새 상태 반환
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogState {
        match self.state {
            DialogState::Closed => {}
            DialogState::ErrorShown => {
                let parent = self.area();
                let dismissed = self
                    .error_popup
                    .as_mut()
                    .map(|popup| popup.handle_key(key, parent) == WidgetAction::Dismiss)
                    .unwrap_or(true);
                if dismissed {
                    self.dismiss_error();
                }
            }
            DialogState::Navigating | DialogState::EditingName => match key.code {
                KeyCode::Esc => self.cancel(),
                KeyCode::Tab => {
                    self.focus.next();
                    self.sync_state_to_focus();
                }
                KeyCode::BackTab => {
                    self.focus.previous();
                    self.sync_state_to_focus();
                }
                _ if self.state == DialogState::Navigating => self.handle_selector_key(key),
                KeyCode::Enter => self.submit(),
                _ => {
                    let parent = self.area();
                    self.name_field.handle_key(key, parent);
                }
            },
        }
        self.state
    }

    /// 마우스 이벤트 처리 (왼쪽 버튼 누름만 사용)
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> DialogState {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.handle_press(i32::from(mouse.column), i32::from(mouse.row))
        } else {
            self.state
        }
    }

    /// 포인터 누름 처리
    ///
    /// 현재 영역 기준으로 하위 위젯을 찾아 포커스를 옮기고 입력을 전달한다.
    pub fn handle_press(&mut self, x: i32, y: i32) -> DialogState {
        if matches!(self.state, DialogState::ErrorShown | DialogState::Closed) {
            return self.state;
        }

        let parent = self.area();
        let regions = [
            (FocusTarget::Selector, self.selector.area(parent)),
            (FocusTarget::NameField, self.name_field.area(parent)),
        ];

        if let Some(target) = self.focus.hit_test(&regions, x, y) {
            self.focus.focus(target);
            self.sync_state_to_focus();
            match target {
                FocusTarget::Selector => self.selector.handle_press(x, y, parent),
                FocusTarget::NameField => self.name_field.handle_press(x, y, parent),
            };
            return self.state;
        }

        if self.show_buttons {
            if self.submit_button.handle_press(x, y, parent) == WidgetAction::Activate {
                self.submit();
            } else if self.cancel_button.handle_press(x, y, parent) == WidgetAction::Activate {
                self.cancel();
            }
        }
        self.state
    }

    /// 이름 필드 값으로 제출 시도
    ///
    /// 조건을 모두 만족하면 콜백을 호출하고 닫힌다. 아니면 에러 팝업을 띄운다.
    pub fn submit(&mut self) {
        if matches!(self.state, DialogState::ErrorShown | DialogState::Closed) {
            return;
        }

        let name = self.name_field.value();
        let composed = compose_path(self.selector.current_dir(), name);
        let unmet = unmet_requirements(&self.requirements, name, &composed, &self.source);
        if !unmet.is_empty() {
            tracing::warn!("Submission rejected: unmet {:?}", unmet);
            let labels = unmet.iter().map(|r| r.label().to_string()).collect();
            self.show_error(ErrorPopup::unmet_requirements(labels));
            return;
        }

        tracing::info!("Submitted {:?}", composed);
        self.state = DialogState::Closed;
        if let Some(callback) = self.on_submit.take() {
            callback(composed.clone());
        }
        self.submitted = Some(composed);
    }

    /// 콜백 없이 닫기
    pub fn cancel(&mut self) {
        if self.state == DialogState::Closed {
            return;
        }
        tracing::info!("Dialog cancelled");
        self.state = DialogState::Closed;
        self.error_popup = None;
        self.on_submit = None;
    }

    /// 호스트가 터미널 커서를 둘 위치 (이름 편집 중일 때만)
    pub fn cursor_position(&self) -> Option<Position> {
        if self.state != DialogState::EditingName {
            return None;
        }
        self.name_field.cursor_position(self.area())
    }

    /// 다이얼로그 렌더링 (읽기 전용)
    pub fn render(&self, root: Rect, buf: &mut Buffer, theme: &Theme) {
        if self.is_closed() {
            return;
        }

        let parent = dialog_area(root);
        let Some(rect) = clip_to_buffer(parent, buf) else {
            return;
        };

        let title = match self.mode {
            SelectionMode::OpenFile => " Open File ",
            SelectionMode::OpenDirectory => " Select Directory ",
        };
        Clear.render(rect, buf);
        Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(theme.title.to_color())
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(Line::styled(
                KEY_HINTS,
                Style::default().fg(theme.hint.to_color()),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border.to_color()))
            .style(
                Style::default()
                    .fg(theme.fg.to_color())
                    .bg(theme.bg.to_color()),
            )
            .render(rect, buf);

        self.render_header(parent, buf, theme);

        let popup_open = self.state == DialogState::ErrorShown;
        let selector_focused = !popup_open && self.focus.is_focused(FocusTarget::Selector);
        let field_focused = !popup_open && self.focus.is_focused(FocusTarget::NameField);
        self.selector.render(parent, buf, theme, selector_focused);
        self.name_field.render(parent, buf, theme, field_focused);

        if self.show_buttons {
            self.submit_button.render(parent, buf, theme, false);
            self.cancel_button.render(parent, buf, theme, false);
        }

        if let Some(popup) = &self.error_popup {
            popup.render(parent, buf, theme, true);
        }
    }

    fn render_header(&self, parent: Rectangle, buf: &mut Buffer, theme: &Theme) {
        let Some(rect) = clip_to_buffer(resolve(WidgetRole::Header, parent), buf) else {
            return;
        };
        let text = fit_path(self.selector.current_dir(), rect.width as usize);
        buf.set_stringn(
            rect.x,
            rect.y,
            text,
            rect.width as usize,
            Style::default().fg(theme.fg.to_color()),
        );
    }

    fn handle_selector_key(&mut self, key: KeyEvent) {
        let parent = self.area();
        match self.selector.handle_key(key, parent) {
            WidgetAction::Activate => self.activate_selection(),
            WidgetAction::GoToParent => {
                let window_height = FileSelector::window_height(self.selector.area(parent));
                if let Err(e) = self.selector.go_to_parent(&self.source, window_height) {
                    tracing::warn!("Failed to open parent directory: {}", e);
                    self.show_error(ErrorPopup::new("Cannot open directory", e.to_string()));
                }
            }
            WidgetAction::ToggleHidden => {
                if let Err(e) = self.selector.toggle_hidden(&self.source) {
                    tracing::warn!("Failed to refresh directory: {}", e);
                    self.show_error(ErrorPopup::new("Cannot read directory", e.to_string()));
                }
            }
            _ => {}
        }
    }

    fn activate_selection(&mut self) {
        match self.selector.activate_selection(&self.source) {
            Ok(Activation::Descended(path)) => {
                tracing::debug!("Descended into {:?}", path);
            }
            Ok(Activation::Selected(path)) => {
                self.name_field.set_value(path.display().to_string());
            }
            Ok(Activation::Nothing) => {}
            Err(e) => {
                tracing::warn!("Failed to open directory: {}", e);
                self.show_error(ErrorPopup::new("Cannot open directory", e.to_string()));
            }
        }
    }

    fn show_error(&mut self, popup: ErrorPopup) {
        if self.state != DialogState::ErrorShown {
            self.resume_state = self.state;
        }
        self.error_popup = Some(popup);
        self.set_state(DialogState::ErrorShown);
    }

    fn dismiss_error(&mut self) {
        self.error_popup = None;
        self.set_state(self.resume_state);
    }

    fn sync_state_to_focus(&mut self) {
        let state = match self.focus.current() {
            Some(FocusTarget::NameField) => DialogState::EditingName,
            _ => DialogState::Navigating,
        };
        self.set_state(state);
    }

    fn set_state(&mut self, state: DialogState) {
        if self.state != state {
            tracing::debug!("Dialog state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }
}

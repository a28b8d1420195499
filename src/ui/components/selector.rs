// Selector component - 파일/디렉토리 선택 목록
//
// 현재 디렉토리의 항목을 보여주고, 방향키로 선택을 옮기며 Enter로 디렉토리에 들어간다.

use crate::models::entry::{Entry, IconStyle, SelectionMode};
use crate::models::viewport::ViewportScroller;
use crate::system::filesystem::DirectorySource;
use crate::ui::components::widget::{clip_to_buffer, DialogWidget, WidgetAction};
use crate::ui::layout::{resolve, Rectangle, WidgetRole};
use crate::ui::theme::Theme;
use crate::utils::error::{PickerError, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use std::path::{Component, Path, PathBuf};

/// 선택 이동 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
}

/// 항목 활성화 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// 디렉토리로 들어감 (목록 갱신됨)
    Descended(PathBuf),
    /// 파일이 선택됨
    Selected(PathBuf),
    /// 선택할 항목 없음
    Nothing,
}

/// 파일/디렉토리 선택기
#[derive(Debug, Clone)]
pub struct FileSelector {
    current_dir: PathBuf,
    entries: Vec<Entry>,
    viewport: ViewportScroller,
    mode: SelectionMode,
    icon_style: IconStyle,
    /// 소문자, 점 제외. 비어 있으면 모든 파일 허용
    allowed_extensions: Vec<String>,
    show_hidden: bool,
    title: String,
}

impl FileSelector {
    /// 빈 선택기 생성 (`open` 호출 전까지 항목 없음)
    pub fn new(mode: SelectionMode, icon_style: IconStyle) -> Self {
        Self {
            current_dir: PathBuf::new(),
            entries: Vec::new(),
            viewport: ViewportScroller::new(),
            mode,
            icon_style,
            allowed_extensions: Vec::new(),
            show_hidden: true,
            title: String::new(),
        }
    }

    /// 허용 확장자 설정 (".csv", "CSV", "csv" 모두 같은 의미)
    pub fn allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// 숨김 항목 표시 여부 설정
    pub fn show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn viewport(&self) -> &ViewportScroller {
        &self.viewport
    }

    pub fn is_showing_hidden(&self) -> bool {
        self.show_hidden
    }

    /// 디렉토리 열기
    ///
    /// 디렉토리가 먼저, 파일이 뒤에 오며 각 그룹 안의 순서는 열거 서비스 순서를 따른다.
    /// 실패하면 기존 목록은 그대로 유지된다.
    pub fn open(&mut self, dir: &Path, source: &dyn DirectorySource) -> Result<()> {
        let dir = absolute_path(dir)?;
        if !source.exists(&dir) {
            return Err(PickerError::DirectoryNotFound { path: dir });
        }

        let items = source.list(&dir)?;
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for item in items {
            let path = dir.join(&item.name);
            let entry = if item.is_directory {
                Entry::directory(item.name, path)
            } else {
                Entry::file(item.name, path)
            };

            if !self.show_hidden && entry.is_hidden() {
                continue;
            }
            if entry.is_directory() {
                dirs.push(entry);
            } else if self.accepts_file(&entry) {
                files.push(entry);
            }
        }

        tracing::debug!(
            "Opened {:?}: {} directories, {} files",
            dir,
            dirs.len(),
            files.len()
        );

        dirs.extend(files);
        self.entries = dirs;
        self.title = title_for(&dir);
        self.current_dir = dir;
        self.viewport.reset();
        Ok(())
    }

    /// 현재 디렉토리 다시 읽기
    pub fn refresh(&mut self, source: &dyn DirectorySource) -> Result<()> {
        let dir = self.current_dir.clone();
        self.open(&dir, source)
    }

    /// 숨김 항목 표시 전환 후 다시 읽기
    pub fn toggle_hidden(&mut self, source: &dyn DirectorySource) -> Result<()> {
        self.show_hidden = !self.show_hidden;
        if let Err(e) = self.refresh(source) {
            self.show_hidden = !self.show_hidden;
            return Err(e);
        }
        Ok(())
    }

    /// 상위 디렉토리로 이동
    ///
    /// 이동 후에는 방금 나온 디렉토리를 선택한다. 루트에서는 false.
    pub fn go_to_parent(
        &mut self,
        source: &dyn DirectorySource,
        window_height: usize,
    ) -> Result<bool> {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return Ok(false);
        };

        let previous = self.current_dir.clone();
        self.open(&parent, source)?;
        if let Some(index) = self.entries.iter().position(|e| e.path == previous) {
            self.viewport.select(index, self.entries.len(), window_height);
        }
        Ok(true)
    }

    /// 선택된 항목 활성화
    pub fn activate_selection(&mut self, source: &dyn DirectorySource) -> Result<Activation> {
        let Some(entry) = self.current_selection().cloned() else {
            return Ok(Activation::Nothing);
        };

        if entry.is_directory() {
            self.open(&entry.path, source)?;
            Ok(Activation::Descended(entry.path))
        } else {
            Ok(Activation::Selected(entry.path))
        }
    }

    /// 선택 이동
    pub fn navigate(&mut self, direction: ScrollDirection, window_height: usize) {
        let len = self.entries.len();
        self.viewport.fit(len, window_height);
        match direction {
            ScrollDirection::Up => self.viewport.move_up(len),
            ScrollDirection::Down => self.viewport.move_down(len, window_height),
            ScrollDirection::PageUp => self.viewport.page_up(len, window_height),
            ScrollDirection::PageDown => self.viewport.page_down(len, window_height),
            ScrollDirection::First => self.viewport.move_to_first(len),
            ScrollDirection::Last => self.viewport.move_to_last(len, window_height),
        }
    }

    /// 선택된 항목 반환
    pub fn current_selection(&self) -> Option<&Entry> {
        self.entries.get(self.viewport.selected_index())
    }

    /// 목록 창 높이 (테두리 제외)
    pub fn window_height(area: Rectangle) -> usize {
        (area.height() - 2).max(0) as usize
    }

    fn accepts_file(&self, entry: &Entry) -> bool {
        if self.mode != SelectionMode::OpenFile {
            return false;
        }
        if self.allowed_extensions.is_empty() {
            return true;
        }
        entry
            .extension()
            .is_some_and(|ext| self.allowed_extensions.contains(&ext))
    }
}

impl DialogWidget for FileSelector {
    fn area(&self, parent: Rectangle) -> Rectangle {
        resolve(WidgetRole::Selector, parent)
    }

    fn handle_key(&mut self, key: KeyEvent, parent: Rectangle) -> WidgetAction {
        let window_height = Self::window_height(self.area(parent));
        let direction = match key.code {
            KeyCode::Up => ScrollDirection::Up,
            KeyCode::Down => ScrollDirection::Down,
            KeyCode::PageUp => ScrollDirection::PageUp,
            KeyCode::PageDown => ScrollDirection::PageDown,
            KeyCode::Home => ScrollDirection::First,
            KeyCode::End => ScrollDirection::Last,
            KeyCode::Enter => return WidgetAction::Activate,
            KeyCode::Backspace | KeyCode::Left => return WidgetAction::GoToParent,
            KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return WidgetAction::ToggleHidden
            }
            _ => return WidgetAction::Ignored,
        };

        self.navigate(direction, window_height);
        WidgetAction::Handled
    }

    fn handle_press(&mut self, x: i32, y: i32, parent: Rectangle) -> WidgetAction {
        let area = self.area(parent);
        if !area.contains(x, y) {
            return WidgetAction::Ignored;
        }

        // 테두리 안쪽 행만 항목에 대응
        let window_height = Self::window_height(area);
        let row = y - area.start_y - 1;
        if row < 0 || row as usize >= window_height {
            return WidgetAction::Handled;
        }

        let len = self.entries.len();
        let index = self.viewport.visible_range(len, window_height).start + row as usize;
        if index < len {
            self.viewport.select(index, len, window_height);
        }
        WidgetAction::Handled
    }

    fn render(&self, parent: Rectangle, buf: &mut Buffer, theme: &Theme, focused: bool) {
        let area = self.area(parent);
        let Some(rect) = clip_to_buffer(area, buf) else {
            return;
        };

        let border_color = if focused {
            theme.border_focused.to_color()
        } else {
            theme.border.to_color()
        };
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(
                Style::default()
                    .fg(theme.title.to_color())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg.to_color()));
        let inner = block.inner(rect);
        block.render(rect, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.entries.is_empty() {
            buf.set_stringn(
                inner.x,
                inner.y,
                "(empty)",
                inner.width as usize,
                Style::default().fg(theme.hint.to_color()),
            );
            return;
        }

        let window_height = Self::window_height(area);
        let selected = self.viewport.selected_index();
        let visible = self.viewport.visible_range(self.entries.len(), window_height);
        for (row, index) in visible.enumerate() {
            if row >= inner.height as usize {
                break;
            }

            let entry = &self.entries[index];
            let y = inner.y + row as u16;
            let style = if index == selected {
                let style = Style::default()
                    .fg(theme.entry_selected.to_color())
                    .bg(theme.entry_selected_bg.to_color());
                // 선택 행 배경 채우기
                for x in inner.x..inner.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_style(style);
                    }
                }
                if focused {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                }
            } else if entry.is_directory() {
                Style::default().fg(theme.entry_directory.to_color())
            } else {
                Style::default().fg(theme.entry_file.to_color())
            };

            buf.set_stringn(
                inner.x,
                y,
                entry.display(self.icon_style),
                inner.width as usize,
                style,
            );
        }
    }
}

/// 목록 제목 (디렉토리 이름, 루트면 전체 경로)
fn title_for(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.display().to_string())
}

/// 절대 경로로 변환하고 `.`/`..` 정리
fn absolute_path(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::filesystem::{FileSystem, ListedItem};
    use ratatui::layout::Rect;
    use std::collections::HashMap;
    use std::fs::{self, File};
    use tempfile::TempDir;

    /// 메모리 기반 열거 서비스
    struct MemorySource {
        dirs: HashMap<PathBuf, Vec<ListedItem>>,
    }

    impl MemorySource {
        fn new(dirs: &[(&str, &[(&str, bool)])]) -> Self {
            let dirs = dirs
                .iter()
                .map(|(path, items)| {
                    let items = items
                        .iter()
                        .map(|(name, is_dir)| ListedItem::new(*name, *is_dir))
                        .collect();
                    (PathBuf::from(path), items)
                })
                .collect();
            Self { dirs }
        }
    }

    impl DirectorySource for MemorySource {
        fn exists(&self, path: &Path) -> bool {
            self.dirs.contains_key(path)
        }

        fn list(&self, path: &Path) -> Result<Vec<ListedItem>> {
            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| PickerError::DirectoryNotFound {
                    path: path.to_path_buf(),
                })
        }
    }

    fn labels(selector: &FileSelector) -> Vec<&str> {
        selector.entries().iter().map(|e| e.label.as_str()).collect()
    }

    fn parent_for_window(rows: i32) -> Rectangle {
        // 선택기 창 높이가 rows가 되는 다이얼로그 영역
        Rectangle::new(0, 0, 40, rows + 2 + 3 + 7)
    }

    #[test]
    fn test_directories_before_files() {
        let source = MemorySource::new(&[(
            "/tmp",
            &[("b.txt", false), ("a", true), ("c.md", false), ("d", true)],
        )]);
        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii);
        selector.open(Path::new("/tmp"), &source).unwrap();

        assert_eq!(labels(&selector), vec!["a", "d", "b.txt", "c.md"]);
        assert_eq!(selector.title(), "tmp");
    }

    #[test]
    fn test_open_directory_mode_hides_files() {
        let source = MemorySource::new(&[("/data", &[("x.txt", false), ("y.txt", false)])]);
        let mut selector = FileSelector::new(SelectionMode::OpenDirectory, IconStyle::Ascii);
        selector.open(Path::new("/data"), &source).unwrap();

        assert!(selector.entries().is_empty());
        selector.navigate(ScrollDirection::Down, 5);
        assert_eq!(selector.viewport().selected_index(), 0);
        assert!(selector.current_selection().is_none());
    }

    #[test]
    fn test_allowed_extensions_filter_files_only() {
        let source = MemorySource::new(&[(
            "/data",
            &[("notes.txt", false), ("table.CSV", false), ("sub", true)],
        )]);
        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii)
            .allowed_extensions([".csv"]);
        selector.open(Path::new("/data"), &source).unwrap();

        assert_eq!(labels(&selector), vec!["sub", "table.CSV"]);
    }

    #[test]
    fn test_hidden_entries_filtered_when_disabled() {
        let source = MemorySource::new(&[("/home", &[(".cache", true), ("docs", true)])]);
        let mut selector =
            FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii).show_hidden(false);
        selector.open(Path::new("/home"), &source).unwrap();
        assert_eq!(labels(&selector), vec!["docs"]);

        selector.toggle_hidden(&source).unwrap();
        assert!(selector.is_showing_hidden());
        assert_eq!(labels(&selector), vec![".cache", "docs"]);
    }

    #[test]
    fn test_open_missing_directory_keeps_state() {
        let source = MemorySource::new(&[("/tmp", &[("a", true)])]);
        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii);
        selector.open(Path::new("/tmp"), &source).unwrap();

        let result = selector.open(Path::new("/missing"), &source);
        assert!(matches!(result, Err(PickerError::DirectoryNotFound { .. })));
        assert_eq!(selector.current_dir(), Path::new("/tmp"));
        assert_eq!(labels(&selector), vec!["a"]);
    }

    #[test]
    fn test_activate_descends_and_selects() {
        let source = MemorySource::new(&[
            ("/tmp", &[("a", true), ("b.txt", false)]),
            ("/tmp/a", &[("inner.txt", false)]),
        ]);
        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii);
        selector.open(Path::new("/tmp"), &source).unwrap();

        let activation = selector.activate_selection(&source).unwrap();
        assert_eq!(activation, Activation::Descended(PathBuf::from("/tmp/a")));
        assert_eq!(selector.title(), "a");
        assert_eq!(labels(&selector), vec!["inner.txt"]);

        let activation = selector.activate_selection(&source).unwrap();
        assert_eq!(
            activation,
            Activation::Selected(PathBuf::from("/tmp/a/inner.txt"))
        );
    }

    #[test]
    fn test_activate_on_empty_list() {
        let source = MemorySource::new(&[("/empty", &[])]);
        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii);
        selector.open(Path::new("/empty"), &source).unwrap();
        assert_eq!(
            selector.activate_selection(&source).unwrap(),
            Activation::Nothing
        );
    }

    #[test]
    fn test_parent_round_trip_restores_membership() {
        let source = MemorySource::new(&[
            ("/", &[("tmp", true)]),
            ("/tmp", &[("a", true), ("b", true), ("c.txt", false)]),
            ("/tmp/b", &[("deep.txt", false)]),
        ]);
        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii);
        selector.open(Path::new("/tmp"), &source).unwrap();
        let before: Vec<Entry> = selector.entries().to_vec();

        selector.navigate(ScrollDirection::Down, 5);
        selector.activate_selection(&source).unwrap();
        assert_eq!(selector.current_dir(), Path::new("/tmp/b"));

        assert!(selector.go_to_parent(&source, 5).unwrap());
        assert_eq!(selector.entries(), before.as_slice());
        assert_eq!(selector.current_selection().unwrap().label, "b");

        assert!(selector.go_to_parent(&source, 5).unwrap());
        assert_eq!(selector.title(), "/");
        assert!(!selector.go_to_parent(&source, 5).unwrap());
    }

    #[test]
    fn test_open_is_idempotent_on_real_filesystem() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("zeta")).unwrap();
        fs::create_dir(temp.path().join("Alpha")).unwrap();
        File::create(temp.path().join("b.txt")).unwrap();
        File::create(temp.path().join("a.txt")).unwrap();

        let fs = FileSystem::new();
        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii);
        selector.open(temp.path(), &fs).unwrap();
        let first: Vec<Entry> = selector.entries().to_vec();
        selector.open(temp.path(), &fs).unwrap();

        assert_eq!(selector.entries(), first.as_slice());
        assert_eq!(labels(&selector), vec!["Alpha", "zeta", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_relative_path_is_normalized() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        let dotted = temp.path().join("sub").join("..").join(".");

        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii);
        selector.open(&dotted, &FileSystem::new()).unwrap();
        assert_eq!(selector.current_dir(), temp.path());
    }

    #[test]
    fn test_key_navigation_keeps_selection_visible() {
        let items: Vec<(String, bool)> = (0..20).map(|i| (format!("f{:02}", i), false)).collect();
        let borrowed: Vec<(&str, bool)> = items.iter().map(|(n, d)| (n.as_str(), *d)).collect();
        let source = MemorySource::new(&[("/many", borrowed.as_slice())]);
        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii);
        selector.open(Path::new("/many"), &source).unwrap();

        let parent = parent_for_window(4);
        assert_eq!(FileSelector::window_height(selector.area(parent)), 4);

        for _ in 0..6 {
            selector.handle_key(KeyEvent::from(KeyCode::Down), parent);
        }
        assert_eq!(selector.viewport().selected_index(), 6);
        assert_eq!(selector.viewport().top_index(), 3);

        selector.handle_key(KeyEvent::from(KeyCode::End), parent);
        assert_eq!(selector.viewport().selected_index(), 19);
        assert_eq!(selector.viewport().top_index(), 16);

        assert_eq!(
            selector.handle_key(KeyEvent::from(KeyCode::Enter), parent),
            WidgetAction::Activate
        );
        assert_eq!(
            selector.handle_key(KeyEvent::from(KeyCode::Char('x')), parent),
            WidgetAction::Ignored
        );
    }

    #[test]
    fn test_press_selects_row() {
        let source = MemorySource::new(&[(
            "/tmp",
            &[("a", true), ("b", true), ("c", false), ("d", false)],
        )]);
        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii);
        selector.open(Path::new("/tmp"), &source).unwrap();

        let parent = parent_for_window(4);
        let area = selector.area(parent);

        // 첫 항목 행은 테두리 바로 아래
        let action = selector.handle_press(area.start_x + 2, area.start_y + 3, parent);
        assert_eq!(action, WidgetAction::Handled);
        assert_eq!(selector.current_selection().unwrap().label, "c");

        // 영역 밖
        let action = selector.handle_press(area.stop_x, area.start_y + 1, parent);
        assert_eq!(action, WidgetAction::Ignored);
        assert_eq!(selector.current_selection().unwrap().label, "c");
    }

    #[test]
    fn test_render_visible_rows() {
        let source = MemorySource::new(&[(
            "/tmp",
            &[("a", true), ("b.txt", false), ("c.txt", false)],
        )]);
        let mut selector = FileSelector::new(SelectionMode::OpenFile, IconStyle::Ascii);
        selector.open(Path::new("/tmp"), &source).unwrap();

        let parent = parent_for_window(2);
        selector.handle_key(KeyEvent::from(KeyCode::Down), parent);
        selector.handle_key(KeyEvent::from(KeyCode::Down), parent);

        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 20));
        selector.render(parent, &mut buf, &Theme::dark(), true);

        let area = selector.area(parent);
        let row = |y: i32| -> String {
            (area.start_x + 1..area.stop_x - 1)
                .map(|x| buf.cell((x as u16, y as u16)).unwrap().symbol().to_string())
                .collect()
        };

        let top_border = row(area.start_y);
        assert!(top_border.contains("tmp"), "border={}", top_border);
        assert!(row(area.start_y + 1).starts_with("      b.txt"));
        assert!(row(area.start_y + 2).starts_with("      c.txt"));
        let selected_cell = buf
            .cell(((area.start_x + 1) as u16, (area.start_y + 2) as u16))
            .unwrap();
        assert_eq!(selected_cell.bg, Theme::dark().entry_selected_bg.to_color());
    }
}

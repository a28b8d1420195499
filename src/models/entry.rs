use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 항목 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 디렉토리
    Directory,
    /// 파일
    File,
}

/// 선택 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// 파일 열기 (디렉토리 + 파일 표시)
    #[default]
    OpenFile,
    /// 디렉토리 열기 (디렉토리만 표시)
    OpenDirectory,
}

/// 아이콘 표시 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    /// 유니코드 아이콘 (기본)
    #[default]
    Unicode,
    /// ASCII 텍스트 아이콘 (터미널 호환)
    Ascii,
}

impl IconStyle {
    /// 항목 종류에 따른 아이콘 반환
    ///
    /// 유니코드 폴더 아이콘은 두 칸을 차지하므로 파일 아이콘 뒤에 공백을 붙여 폭을 맞춘다.
    pub fn icon(self, kind: EntryKind) -> &'static str {
        match (self, kind) {
            (IconStyle::Unicode, EntryKind::Directory) => "\u{1F4C1}",
            (IconStyle::Unicode, EntryKind::File) => "\u{1F5CE} ",
            (IconStyle::Ascii, EntryKind::Directory) => "<DIR>",
            (IconStyle::Ascii, EntryKind::File) => "     ",
        }
    }
}

/// 선택기 항목 (디렉토리를 열 때마다 새로 생성되는 스냅샷)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 항목 종류
    pub kind: EntryKind,
    /// 표시 이름
    pub label: String,
    /// 전체 경로
    pub path: PathBuf,
}

impl Entry {
    pub fn new(kind: EntryKind, label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            label: label.into(),
            path: path.into(),
        }
    }

    pub fn directory(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(EntryKind::Directory, label, path)
    }

    pub fn file(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(EntryKind::File, label, path)
    }

    /// 디렉토리 여부 확인
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// 파일 여부 확인
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// 숨김 항목 여부 ('.'으로 시작)
    pub fn is_hidden(&self) -> bool {
        self.label.starts_with('.')
    }

    /// 소문자 확장자 (점 제외)
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// 화면에 표시할 행 텍스트 (아이콘 + 이름)
    pub fn display(&self, icon_style: IconStyle) -> String {
        format!("{} {}", icon_style.icon(self.kind), self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_checks() {
        let dir = Entry::directory("src", "/tmp/src");
        assert!(dir.is_directory());
        assert!(!dir.is_file());

        let file = Entry::file("main.rs", "/tmp/main.rs");
        assert!(file.is_file());
        assert!(!file.is_directory());
    }

    #[test]
    fn test_entry_extension_lowercase() {
        let file = Entry::file("REPORT.CSV", "/tmp/REPORT.CSV");
        assert_eq!(file.extension().as_deref(), Some("csv"));

        let no_ext = Entry::file("Makefile", "/tmp/Makefile");
        assert_eq!(no_ext.extension(), None);
    }

    #[test]
    fn test_entry_display_ascii() {
        let dir = Entry::directory("docs", "/tmp/docs");
        let file = Entry::file("a.txt", "/tmp/a.txt");

        assert_eq!(dir.display(IconStyle::Ascii), "<DIR> docs");
        assert_eq!(file.display(IconStyle::Ascii), "      a.txt");
    }

    #[test]
    fn test_hidden_entry() {
        assert!(Entry::file(".env", "/tmp/.env").is_hidden());
        assert!(!Entry::file("env", "/tmp/env").is_hidden());
    }
}

use crate::utils::error::PickerError;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 색상 테마
///
/// 다이얼로그 전체의 색상을 정의한다.
/// TOML 파일에서 로드하거나 미리 정의된 테마를 사용할 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg: ColorDef,
    pub fg: ColorDef,

    // 테두리
    pub border: ColorDef,
    pub border_focused: ColorDef,
    pub title: ColorDef,
    pub hint: ColorDef,

    // 항목 목록
    pub entry_file: ColorDef,
    pub entry_directory: ColorDef,
    pub entry_selected: ColorDef,
    pub entry_selected_bg: ColorDef,

    // 입력/버튼
    pub input_bg: ColorDef,
    pub button_bg: ColorDef,
    pub button_fg: ColorDef,

    // 에러 팝업
    pub error_border: ColorDef,
    pub error_fg: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(value) | ColorDef::Named(value) if value.starts_with('#') => {
                parse_hex_color(value)
            }
            ColorDef::Hex(value) | ColorDef::Named(value) => parse_named_color(value),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg: "#2d2d30".into(),
            fg: "#d4d4d4".into(),

            border: "#3c3c3c".into(),
            border_focused: "#0078d4".into(),
            title: "#0078d4".into(),
            hint: "#808080".into(),

            entry_file: "#d4d4d4".into(),
            entry_directory: "#569cd6".into(),
            entry_selected: "#ffffff".into(),
            entry_selected_bg: "#0078d4".into(),

            input_bg: "#1e1e1e".into(),
            button_bg: "#3c3c3c".into(),
            button_fg: "#d4d4d4".into(),

            error_border: "#ffa500".into(),
            error_fg: "#f44747".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg: "#f3f3f3".into(),
            fg: "#1e1e1e".into(),

            border: "#cccccc".into(),
            border_focused: "#0078d4".into(),
            title: "#0078d4".into(),
            hint: "#6e6e6e".into(),

            entry_file: "#1e1e1e".into(),
            entry_directory: "#0066cc".into(),
            entry_selected: "#000000".into(),
            entry_selected_bg: "#add6ff".into(),

            input_bg: "#ffffff".into(),
            button_bg: "#e0e0e0".into(),
            button_fg: "#1e1e1e".into(),

            error_border: "#ff8c00".into(),
            error_fg: "#e51400".into(),
        }
    }

    /// High Contrast 테마
    pub fn high_contrast() -> Self {
        Theme {
            bg: "#000000".into(),
            fg: "#ffffff".into(),

            border: "#808080".into(),
            border_focused: "#00ff00".into(),
            title: "#00ff00".into(),
            hint: "#c0c0c0".into(),

            entry_file: "#ffffff".into(),
            entry_directory: "#00ffff".into(),
            entry_selected: "#000000".into(),
            entry_selected_bg: "#00ff00".into(),

            input_bg: "#000000".into(),
            button_bg: "#000000".into(),
            button_fg: "#00ff00".into(),

            error_border: "#ffff00".into(),
            error_fg: "#ff0000".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// 테마 관리자
///
/// 기본 테마와 설정 디렉토리의 사용자 테마를 이름으로 찾는다.
pub struct ThemeManager {
    current_theme: Theme,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current_theme: Theme::dark(),
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
                ("high_contrast".to_string(), Theme::high_contrast()),
            ],
        }
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    /// 테마 전환 (이름으로)
    pub fn switch_theme(&mut self, name: &str) -> Result<(), PickerError> {
        match self.available_themes.iter().find(|(n, _)| n == name) {
            Some((_, theme)) => {
                self.current_theme = theme.clone();
                Ok(())
            }
            None => Err(PickerError::Config(format!("unknown theme: {}", name))),
        }
    }

    /// 사용 가능한 테마 목록 반환
    pub fn available_themes(&self) -> Vec<String> {
        self.available_themes
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// 커스텀 테마 추가
    pub fn add_theme(&mut self, name: String, theme: Theme) {
        self.available_themes.push((name, theme));
    }

    /// 디렉토리의 `*.toml` 테마 파일 로드 (파일 이름이 테마 이름)
    pub fn load_themes_from_dir(&mut self, themes_dir: &Path) -> Result<(), anyhow::Error> {
        if !themes_dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(themes_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            match Theme::from_file(&path) {
                Ok(theme) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("custom")
                        .to_string();
                    self.add_theme(name, theme);
                }
                Err(e) => tracing::warn!("Skipping theme {:?}: {}", path, e),
            }
        }

        Ok(())
    }

    /// 설정 디렉토리(`boksl-picker/themes`)에서 테마 파일 로드
    pub fn load_themes_from_config_dir(&mut self) -> Result<(), anyhow::Error> {
        if let Some(config_dir) = dirs::config_dir() {
            self.load_themes_from_dir(&config_dir.join("boksl-picker").join("themes"))?;
        }
        Ok(())
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

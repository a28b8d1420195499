// Picker configuration - config.toml 로드

use crate::models::entry::{IconStyle, SelectionMode};
use crate::models::submission::Requirement;
use crate::ui::components::dialog::DialogOptions;
use crate::utils::error::{PickerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "boksl-picker";
const CONFIG_FILE: &str = "config.toml";

/// 사용자 설정
///
/// 파일에 없는 항목은 기본값을 사용한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub icon_style: IconStyle,
    pub show_hidden: bool,
    /// 허용 확장자 (비어 있으면 모든 파일)
    pub allowed_extensions: Vec<String>,
    pub requirements: Vec<Requirement>,
    pub show_buttons: bool,
    /// 테마 이름 (내장 테마 또는 themes 디렉토리의 파일 이름)
    pub theme: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            icon_style: IconStyle::Unicode,
            show_hidden: true,
            allowed_extensions: Vec::new(),
            requirements: vec![Requirement::NonEmptyName],
            show_buttons: false,
            theme: "dark".to_string(),
        }
    }
}

impl PickerConfig {
    /// 기본 설정 파일 경로 (`<config_dir>/boksl-picker/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PickerError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            PickerError::Config(msg) => PickerError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// 설정 로드
    ///
    /// 경로를 지정하면 그 파일이 반드시 있어야 한다. 지정하지 않으면 기본 경로를 읽고,
    /// 파일이 없으면 기본값을 사용한다.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config from {:?}", path);
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// 다이얼로그 옵션 생성
    pub fn dialog_options(
        &self,
        initial_dir: impl Into<PathBuf>,
        mode: SelectionMode,
    ) -> DialogOptions {
        DialogOptions::new(initial_dir)
            .mode(mode)
            .icon_style(self.icon_style)
            .allowed_extensions(self.allowed_extensions.clone())
            .show_hidden(self.show_hidden)
            .requirements(self.requirements.clone())
            .show_buttons(self.show_buttons)
    }
}

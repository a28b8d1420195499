//! 터미널용 모달 파일/디렉토리 선택 다이얼로그
//!
//! 호스트는 [`FileDialog`]를 만들고 키/마우스 이벤트와 터미널 크기를 전달한 뒤,
//! `is_closed()`가 참이 되면 다이얼로그를 정리한다. 제출된 경로는 생성 시 넘긴
//! 콜백으로 한 번 전달된다.

pub mod config;
pub mod models;
pub mod system;
pub mod ui;
pub mod utils;

pub use config::PickerConfig;
pub use models::{IconStyle, Requirement, SelectionMode};
pub use system::{DirectorySource, FileSystem, ListedItem};
pub use ui::{DialogOptions, DialogState, FileDialog, Theme, ThemeManager};
pub use utils::error::{PickerError, Result};

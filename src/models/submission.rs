use crate::system::filesystem::DirectorySource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 제출 시 확인하는 필수 조건
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// 이름 필드가 비어 있지 않음
    NonEmptyName,
    /// 조합된 경로의 상위 디렉토리가 존재함
    ExistingParent,
    /// 조합된 경로가 존재함
    ExistingPath,
}

impl Requirement {
    /// 에러 팝업에 표시할 이름
    pub fn label(self) -> &'static str {
        match self {
            Requirement::NonEmptyName => "Path",
            Requirement::ExistingParent => "Existing parent directory",
            Requirement::ExistingPath => "Existing path",
        }
    }

    fn is_met(self, name: &str, composed: &Path, source: &dyn DirectorySource) -> bool {
        match self {
            Requirement::NonEmptyName => !name.trim().is_empty(),
            Requirement::ExistingParent => composed
                .parent()
                .is_some_and(|parent| source.exists(parent)),
            Requirement::ExistingPath => source.exists(composed),
        }
    }
}

/// 현재 디렉토리와 이름 필드로 최종 경로 조합
///
/// 이름이 절대 경로면 그대로 사용한다.
pub fn compose_path(current_dir: &Path, name: &str) -> PathBuf {
    let name = name.trim();
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        current_dir.join(candidate)
    }
}

/// 충족되지 않은 조건 목록 반환 (비어 있으면 제출 가능)
pub fn unmet_requirements(
    requirements: &[Requirement],
    name: &str,
    composed: &Path,
    source: &dyn DirectorySource,
) -> Vec<Requirement> {
    requirements
        .iter()
        .copied()
        .filter(|req| !req.is_met(name, composed, source))
        .collect()
}

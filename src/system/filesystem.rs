use crate::utils::error::{PickerError, Result};
use std::fs;
use std::path::Path;

/// 디렉토리 나열 결과 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedItem {
    /// 파일/디렉토리 이름
    pub name: String,
    /// 디렉토리 여부 (디렉토리를 가리키는 심볼릭 링크 포함)
    pub is_directory: bool,
}

impl ListedItem {
    pub fn new(name: impl Into<String>, is_directory: bool) -> Self {
        Self {
            name: name.into(),
            is_directory,
        }
    }
}

/// 디렉토리 열거 서비스
///
/// 선택기는 파일 시스템을 직접 읽지 않고 이 트레이트를 통해 목록을 받는다.
/// "존재하지 않음"은 빈 디렉토리와 구분되는 에러로 보고해야 한다.
pub trait DirectorySource {
    /// 경로 존재 확인
    fn exists(&self, path: &Path) -> bool;

    /// 디렉토리 항목 나열
    fn list(&self, path: &Path) -> Result<Vec<ListedItem>>;
}

/// 로컬 파일 시스템 기반 열거 서비스
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }
}

impl DirectorySource for FileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// 디렉토리 읽기
    ///
    /// 결과는 이름 순(대소문자 무시)으로 정렬되어 같은 디렉토리를 다시 열어도
    /// 순서가 바뀌지 않는다.
    fn list(&self, path: &Path) -> Result<Vec<ListedItem>> {
        // 1. 경로 존재 확인
        if !path.exists() {
            return Err(PickerError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }

        // 2. 디렉토리 여부 확인
        if !path.is_dir() {
            return Err(PickerError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        // 3. 디렉토리 읽기
        let read_dir = fs::read_dir(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                PickerError::PermissionDenied {
                    path: path.to_path_buf(),
                }
            } else {
                PickerError::Io(e)
            }
        })?;

        let mut items = Vec::new();
        for entry in read_dir {
            // 에러 발생 시 해당 엔트리는 스킵
            let Ok(entry) = entry else { continue };

            let name = entry.file_name().to_string_lossy().to_string();
            // symlink는 대상 기준으로 판단
            let is_directory = entry.path().is_dir();
            items.push(ListedItem { name, is_directory });
        }

        items.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[cfg(unix)]
    use std::os::unix::fs as unix_fs;

    #[test]
    fn test_filesystem_creation() {
        let fs = FileSystem::new();
        assert!(fs.exists(&PathBuf::from(".")));
    }

    #[test]
    fn test_list_sorted_with_kinds() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("beta")).unwrap();
        File::create(temp.path().join("Alpha.txt")).unwrap();
        File::create(temp.path().join("gamma.md")).unwrap();

        let items = FileSystem::new().list(temp.path()).unwrap();

        assert_eq!(
            items,
            vec![
                ListedItem::new("Alpha.txt", false),
                ListedItem::new("beta", true),
                ListedItem::new("gamma.md", false),
            ]
        );
    }

    #[test]
    fn test_list_empty_directory_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let items = FileSystem::new().list(temp.path()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_list_nonexistent_directory() {
        let fs = FileSystem::new();
        let result = fs.list(&PathBuf::from("/nonexistent/path/12345"));

        match result {
            Err(PickerError::DirectoryNotFound { .. }) => {}
            _ => panic!("Expected DirectoryNotFound error"),
        }
    }

    #[test]
    fn test_list_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        File::create(&file).unwrap();

        match FileSystem::new().list(&file) {
            Err(PickerError::NotADirectory { path }) => assert_eq!(path, file),
            _ => panic!("Expected NotADirectory error"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_list_symlink_to_directory_counts_as_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target");
        fs::create_dir(&target).unwrap();
        unix_fs::symlink(&target, temp.path().join("link")).unwrap();

        let items = FileSystem::new().list(temp.path()).unwrap();
        let link = items.iter().find(|i| i.name == "link").unwrap();
        assert!(link.is_directory);
    }
}

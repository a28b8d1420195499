// Logging setup - 파일 기반 tracing 구독자
//
// 터미널은 TUI가 사용하므로 로그는 항상 파일로 보낸다.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE: &str = "boksl-picker.log";

/// 기본 로그 파일 경로 (`<temp>/boksl-picker.log`)
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// 구독자 생성 (`RUST_LOG`가 없으면 info 레벨)
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}

/// 전역 구독자 설치
pub fn init_file_logging(log_file_path: &Path) -> std::io::Result<()> {
    let log_file = File::create(log_file_path)?;
    build_subscriber(log_file).init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_subscriber_writes_to_file() {
        let log_file = NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(log_file.reopen().unwrap());

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("directory vanished");
        });

        let contents = std::fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("WARN"), "{}", contents);
        assert!(contents.contains("directory vanished"), "{}", contents);
    }

    #[test]
    fn test_default_log_path_in_temp_dir() {
        let path = default_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(LOG_FILE));
    }
}

use std::path::{Component, Path};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 헤더용 경로 표시 문자열
///
/// HOME 아래 경로는 `~`로 시작하고, 너비를 넘으면 첫 구성요소와 마지막 구성요소들만
/// 남긴 `첫/.../끝` 형태로 줄인다.
pub fn fit_path(path: &Path, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let home = dirs::home_dir();
    let shown = home_relative(path, home.as_deref());
    if shown.width() <= max_width {
        return shown;
    }

    let parts: Vec<&str> = shown.split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() <= 2 {
        return keep_tail(&shown, max_width);
    }

    let head = if shown.starts_with('/') {
        format!("/{}", parts[0])
    } else {
        parts[0].to_string()
    };
    let prefix = format!("{}/{}", head, ELLIPSIS);
    if prefix.width() >= max_width {
        return keep_tail(&shown, max_width);
    }

    // 뒤에서부터 들어가는 만큼 구성요소를 채운다
    let mut budget = max_width - prefix.width();
    let mut tail: Vec<&str> = Vec::new();
    for part in parts[1..].iter().rev() {
        let needed = part.width() + 1;
        if needed > budget {
            break;
        }
        budget -= needed;
        tail.push(part);
    }

    if tail.is_empty() {
        return keep_tail(&shown, max_width);
    }
    tail.reverse();
    format!("{}/{}", prefix, tail.join("/"))
}

/// HOME 접두사를 `~`로 치환
fn home_relative(path: &Path, home: Option<&Path>) -> String {
    let Some(home) = home.filter(|h| h.components().any(|c| matches!(c, Component::Normal(_))))
    else {
        return path.display().to_string();
    };

    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}

/// 앞부분을 `...`로 생략하고 끝부분을 남긴다
fn keep_tail(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return text.chars().take(max_width).collect();
    }

    let mut budget = max_width - ELLIPSIS.width();
    let mut kept: Vec<char> = Vec::new();
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if ch_width > budget {
            break;
        }
        budget -= ch_width;
        kept.push(ch);
    }
    kept.reverse();
    format!("{}{}", ELLIPSIS, kept.into_iter().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_relative() {
        let home = Path::new("/home/boksl");
        assert_eq!(home_relative(Path::new("/home/boksl"), Some(home)), "~");
        assert_eq!(
            home_relative(Path::new("/home/boksl/docs/a"), Some(home)),
            "~/docs/a"
        );
        assert_eq!(
            home_relative(Path::new("/home/bokslx/docs"), Some(home)),
            "/home/bokslx/docs"
        );
        // 루트를 HOME으로 쓰는 환경에서는 치환하지 않는다
        assert_eq!(home_relative(Path::new("/tmp"), Some(Path::new("/"))), "/tmp");
        assert_eq!(home_relative(Path::new("/tmp"), None), "/tmp");
    }

    #[test]
    fn test_fit_path_short() {
        assert_eq!(fit_path(Path::new("/tmp/docs"), 20), "/tmp/docs");
        assert_eq!(fit_path(Path::new("/tmp/docs"), 0), "");
    }

    #[test]
    fn test_fit_path_keeps_head_and_tail() {
        let path = Path::new("/srv/projects/picker/temp/planning/server/node_modules");
        let fitted = fit_path(path, 30);
        assert!(fitted.starts_with("/srv/.../"), "fitted={}", fitted);
        assert!(fitted.ends_with("/node_modules"), "fitted={}", fitted);
        assert!(fitted.width() <= 30);
    }

    #[test]
    fn test_fit_path_falls_back_to_tail() {
        let fitted = fit_path(Path::new("/averyveryverylongdirectoryname"), 12);
        assert_eq!(fitted, "...ctoryname");
        assert!(fitted.width() <= 12);
    }

    #[test]
    fn test_keep_tail_wide_chars() {
        let fitted = keep_tail("가나다라마바사", 9);
        assert!(fitted.starts_with(ELLIPSIS));
        assert!(fitted.width() <= 9);
    }
}

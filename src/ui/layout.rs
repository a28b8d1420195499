// Layout system - 다이얼로그 배치 계산
//
// 모든 하위 위젯 영역은 부모 영역 + 고정 여백으로부터 매번 다시 계산한다.
// 캐시하지 않으므로 터미널 크기가 바뀌어도 다음 호출에서 바로 반영된다.

use ratatui::layout::Rect;

/// 다이얼로그 좌우 패딩
pub const DIALOG_PAD_X: i32 = 1;
/// 다이얼로그 상하 패딩
pub const DIALOG_PAD_Y: i32 = 0;

/// 에러 팝업 높이
const ERROR_POPUP_HEIGHT: i32 = 7;

/// 화면 영역 (start 포함, stop 미포함)
///
/// 부모가 너무 작으면 음수 크기가 나올 수 있으므로 `i32`를 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    pub start_x: i32,
    pub start_y: i32,
    pub stop_x: i32,
    pub stop_y: i32,
}

impl Rectangle {
    pub fn new(start_x: i32, start_y: i32, stop_x: i32, stop_y: i32) -> Self {
        Self {
            start_x,
            start_y,
            stop_x,
            stop_y,
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self {
            start_x: i32::from(rect.x),
            start_y: i32::from(rect.y),
            stop_x: i32::from(rect.x) + i32::from(rect.width),
            stop_y: i32::from(rect.y) + i32::from(rect.height),
        }
    }

    pub fn width(&self) -> i32 {
        self.stop_x - self.start_x
    }

    pub fn height(&self) -> i32 {
        self.stop_y - self.start_y
    }

    /// 너비나 높이가 0 이하인지
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_degenerate()
            && x >= self.start_x
            && x < self.stop_x
            && y >= self.start_y
            && y < self.stop_y
    }

    /// 렌더링용 ratatui 영역 변환
    ///
    /// 음수 좌표는 잘라내고, 남는 영역이 없으면 `None` (렌더링 생략).
    pub fn to_rect(&self) -> Option<Rect> {
        let start_x = self.start_x.max(0);
        let start_y = self.start_y.max(0);
        let stop_x = self.stop_x.min(i32::from(u16::MAX));
        let stop_y = self.stop_y.min(i32::from(u16::MAX));
        if stop_x <= start_x || stop_y <= start_y {
            return None;
        }

        Some(Rect {
            x: start_x as u16,
            y: start_y as u16,
            width: (stop_x - start_x) as u16,
            height: (stop_y - start_y) as u16,
        })
    }
}

/// 다이얼로그 내부 위젯 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetRole {
    /// 현재 경로 표시 줄
    Header,
    /// 파일/디렉토리 선택기
    Selector,
    /// 이름 입력 필드
    NameField,
    /// 제출 버튼
    SubmitButton,
    /// 취소 버튼
    CancelButton,
    /// 에러 팝업
    ErrorPopup,
}

/// 루트 영역으로부터 다이얼로그 영역 계산
///
/// 좌우로 1/6, 상하로 1/8씩 안쪽에 배치한다.
pub fn dialog_area(root: Rect) -> Rectangle {
    let x = i32::from(root.x);
    let y = i32::from(root.y);
    let width = i32::from(root.width);
    let height = i32::from(root.height);

    Rectangle::new(
        x + width / 6,
        y + height / 8,
        x + 5 * width / 6,
        y + 7 * height / 8,
    )
}

/// 부모(다이얼로그) 영역으로부터 위젯 영역 계산
pub fn resolve(role: WidgetRole, parent: Rectangle) -> Rectangle {
    let left = parent.start_x + 3 + DIALOG_PAD_X;
    let right = parent.stop_x - 3 - DIALOG_PAD_X;
    let bottom = parent.stop_y - DIALOG_PAD_Y;

    match role {
        WidgetRole::Header => Rectangle::new(
            left,
            parent.start_y + 1 + DIALOG_PAD_Y,
            right,
            parent.start_y + 2 + DIALOG_PAD_Y,
        ),
        WidgetRole::Selector => {
            Rectangle::new(left, parent.start_y + 3 + DIALOG_PAD_Y, right, bottom - 7)
        }
        WidgetRole::NameField => Rectangle::new(left, bottom - 7, right, bottom - 4),
        WidgetRole::SubmitButton => {
            let mid = left + (right - left) / 2;
            Rectangle::new(left, bottom - 4, mid, bottom - 1)
        }
        WidgetRole::CancelButton => {
            let mid = left + (right - left) / 2;
            Rectangle::new(mid, bottom - 4, right, bottom - 1)
        }
        WidgetRole::ErrorPopup => {
            let width = parent.width() * 2 / 3;
            let height = ERROR_POPUP_HEIGHT.min(parent.height());
            let start_x = parent.start_x + (parent.width() - width) / 2;
            let start_y = parent.start_y + (parent.height() - height) / 2;
            Rectangle::new(start_x, start_y, start_x + width, start_y + height)
        }
    }
}

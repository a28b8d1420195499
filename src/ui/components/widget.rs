use crate::ui::layout::Rectangle;
use crate::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

/// 위젯이 입력을 처리한 결과
///
/// 위젯은 자신의 상태만 바꾸고, 디렉토리 이동이나 팝업 닫기처럼 다이얼로그 상태가
/// 필요한 작업은 결과로 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    /// 처리하지 않음
    Ignored,
    /// 위젯 내부에서 처리됨
    Handled,
    /// 현재 항목 활성화 (Enter, 버튼 클릭)
    Activate,
    /// 상위 디렉토리로 이동 요청
    GoToParent,
    /// 숨김 항목 표시 전환 요청
    ToggleHidden,
    /// 팝업 닫기 요청
    Dismiss,
}

/// 다이얼로그 하위 위젯 공통 인터페이스
///
/// 위젯은 부모 영역을 저장하지 않는다. 모든 호출에서 부모의 현재 영역을 받아
/// 자신의 영역을 다시 계산한다.
pub trait DialogWidget {
    /// 부모 영역으로부터 이 위젯의 영역 계산
    fn area(&self, parent: Rectangle) -> Rectangle;

    /// 키 입력 처리
    fn handle_key(&mut self, key: KeyEvent, parent: Rectangle) -> WidgetAction;

    /// 포인터 누름 처리 (좌표는 위젯 영역 안이라고 가정하지 않음)
    fn handle_press(&mut self, x: i32, y: i32, parent: Rectangle) -> WidgetAction;

    /// 버퍼에 렌더링
    fn render(&self, parent: Rectangle, buf: &mut Buffer, theme: &Theme, focused: bool);

    /// 포인터 위치가 위젯 영역 안인지
    fn contains(&self, x: i32, y: i32, parent: Rectangle) -> bool {
        self.area(parent).contains(x, y)
    }
}

/// 위젯 영역을 버퍼 범위로 잘라낸 렌더링 영역. 그릴 곳이 없으면 `None`
pub fn clip_to_buffer(area: Rectangle, buf: &Buffer) -> Option<Rect> {
    let rect = area.to_rect()?.intersection(buf.area);
    if rect.width == 0 || rect.height == 0 {
        None
    } else {
        Some(rect)
    }
}

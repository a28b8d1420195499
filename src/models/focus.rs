use crate::ui::layout::Rectangle;

/// 포커스 대상
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// 파일/디렉토리 선택기
    Selector,
    /// 이름 입력 필드
    NameField,
}

/// 포커스 링
///
/// 순서가 있는 포커스 대상 목록과 현재 인덱스를 관리한다. 항상 정확히 하나의 대상만
/// 포커스를 가진다 (링이 비어 있지 않은 한).
#[derive(Debug, Clone)]
pub struct FocusCoordinator {
    ring: Vec<FocusTarget>,
    index: usize,
}

impl FocusCoordinator {
    pub fn new(ring: Vec<FocusTarget>) -> Self {
        Self { ring, index: 0 }
    }

    /// 현재 포커스 대상
    pub fn current(&self) -> Option<FocusTarget> {
        self.ring.get(self.index).copied()
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current() == Some(target)
    }

    /// 다음 대상으로 (Tab)
    pub fn next(&mut self) -> Option<FocusTarget> {
        if !self.ring.is_empty() {
            self.index = (self.index + 1) % self.ring.len();
        }
        self.current()
    }

    /// 이전 대상으로 (Shift+Tab)
    pub fn previous(&mut self) -> Option<FocusTarget> {
        if !self.ring.is_empty() {
            self.index = (self.index + self.ring.len() - 1) % self.ring.len();
        }
        self.current()
    }

    /// 특정 대상으로 포커스 이동. 링에 없는 대상이면 false
    pub fn focus(&mut self, target: FocusTarget) -> bool {
        match self.ring.iter().position(|t| *t == target) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// 포인터 위치에 해당하는 대상 탐색
    ///
    /// 영역 목록은 호출 시점의 현재 레이아웃이어야 한다. 링에 없는 대상은 무시한다.
    pub fn hit_test(
        &self,
        regions: &[(FocusTarget, Rectangle)],
        x: i32,
        y: i32,
    ) -> Option<FocusTarget> {
        regions
            .iter()
            .filter(|(target, _)| self.ring.contains(target))
            .find(|(_, area)| area.contains(x, y))
            .map(|(target, _)| *target)
    }
}

use std::ops::Range;

/// 목록 선택/스크롤 상태
///
/// 창 높이보다 긴 목록에서 선택 인덱스와 화면 첫 행 인덱스를 관리한다.
/// 목록 자체는 소유하지 않으므로 길이를 인자로 받는다.
///
/// 모든 연산 후 `top <= selected < top + window_height` 와
/// `selected < len` (비어 있지 않을 때)이 유지된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportScroller {
    selected_index: usize,
    top_index: usize,
}

impl ViewportScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// 선택된 항목 인덱스
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// 화면 첫 행 인덱스
    pub fn top_index(&self) -> usize {
        self.top_index
    }

    /// 초기화 (목록이 교체될 때 호출)
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.top_index = 0;
    }

    /// 선택을 한 칸 위로
    pub fn move_up(&mut self, len: usize) {
        if len == 0 || self.selected_index == 0 {
            return;
        }
        self.selected_index -= 1;
        if self.selected_index < self.top_index {
            self.top_index = self.selected_index;
        }
    }

    /// 선택을 한 칸 아래로
    pub fn move_down(&mut self, len: usize, window_height: usize) {
        if len == 0 || window_height == 0 || self.selected_index + 1 >= len {
            return;
        }
        self.selected_index += 1;
        if self.selected_index > self.top_index + window_height - 1 {
            self.top_index = self.selected_index + 1 - window_height;
        }
    }

    /// 한 페이지 위로
    pub fn page_up(&mut self, len: usize, window_height: usize) {
        for _ in 0..window_height.max(1) {
            self.move_up(len);
        }
    }

    /// 한 페이지 아래로
    pub fn page_down(&mut self, len: usize, window_height: usize) {
        for _ in 0..window_height.max(1) {
            self.move_down(len, window_height);
        }
    }

    /// 첫 항목으로 이동
    pub fn move_to_first(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.reset();
    }

    /// 마지막 항목으로 이동
    pub fn move_to_last(&mut self, len: usize, window_height: usize) {
        self.select(len.saturating_sub(1), len, window_height);
    }

    /// 특정 인덱스 선택 (범위를 벗어나면 마지막 항목으로)
    pub fn select(&mut self, index: usize, len: usize, window_height: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = index.min(len - 1);
        self.fit(len, window_height);
    }

    /// 목록 길이/창 높이 변경 후 불변식 복원
    pub fn fit(&mut self, len: usize, window_height: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.selected_index = self.selected_index.min(len - 1);
        if self.selected_index < self.top_index {
            self.top_index = self.selected_index;
        }
        if window_height > 0 && self.selected_index >= self.top_index + window_height {
            self.top_index = self.selected_index + 1 - window_height;
        }
    }

    /// 현재 화면에 보이는 인덱스 범위 (상태 변경 없음)
    ///
    /// 마지막 연산 이후 창 높이가 줄었더라도 선택 항목이 보이도록 보정한다.
    pub fn visible_range(&self, len: usize, window_height: usize) -> Range<usize> {
        let mut fitted = *self;
        fitted.fit(len, window_height);
        let start = fitted.top_index.min(len);
        let end = (start + window_height).min(len);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(v: &ViewportScroller, len: usize, window_height: usize) {
        if len == 0 {
            assert_eq!(v.selected_index(), 0);
            assert_eq!(v.top_index(), 0);
            return;
        }
        assert!(v.selected_index() < len, "selected out of range: {:?}", v);
        assert!(v.top_index() <= v.selected_index(), "top after selected: {:?}", v);
        assert!(
            v.selected_index() < v.top_index() + window_height,
            "selected below window: {:?}",
            v
        );
    }

    #[test]
    fn test_move_down_scrolls_window() {
        let mut v = ViewportScroller::new();
        for _ in 0..4 {
            v.move_down(10, 3);
        }
        assert_eq!(v.selected_index(), 4);
        assert_eq!(v.top_index(), 2);
    }

    #[test]
    fn test_move_up_scrolls_window_back() {
        let mut v = ViewportScroller::new();
        v.select(6, 10, 3);
        assert_eq!(v.top_index(), 4);

        v.move_up(10);
        v.move_up(10);
        v.move_up(10);
        assert_eq!(v.selected_index(), 3);
        assert_eq!(v.top_index(), 3);
    }

    #[test]
    fn test_bounds_are_clamped() {
        let mut v = ViewportScroller::new();
        v.move_up(5);
        assert_eq!(v.selected_index(), 0);

        for _ in 0..20 {
            v.move_down(5, 3);
        }
        assert_eq!(v.selected_index(), 4);
        assert_eq!(v.top_index(), 2);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut v = ViewportScroller::new();
        v.move_down(0, 5);
        v.move_up(0);
        v.page_down(0, 5);
        v.move_to_last(0, 5);
        assert_eq!(v, ViewportScroller::new());
        assert_eq!(v.visible_range(0, 5), 0..0);
    }

    #[test]
    fn test_invariant_holds_for_move_sequences() {
        // 결정적인 의사 난수 시퀀스로 여러 조합 검사
        let mut seed: u32 = 0x1234_5678;
        for len in [1usize, 2, 3, 7, 25] {
            for window_height in [1usize, 2, 4, 10] {
                let mut v = ViewportScroller::new();
                for _ in 0..300 {
                    seed ^= seed << 13;
                    seed ^= seed >> 17;
                    seed ^= seed << 5;
                    match seed % 6 {
                        0 | 1 => v.move_down(len, window_height),
                        2 | 3 => v.move_up(len),
                        4 => v.page_down(len, window_height),
                        _ => v.page_up(len, window_height),
                    }
                    assert_invariant(&v, len, window_height);
                }
            }
        }
    }

    #[test]
    fn test_fit_after_window_shrinks() {
        let mut v = ViewportScroller::new();
        v.select(9, 10, 10);
        assert_eq!(v.top_index(), 0);

        // 창이 3줄로 줄어든 경우
        assert_eq!(v.visible_range(10, 3), 7..10);
        v.fit(10, 3);
        assert_invariant(&v, 10, 3);
        assert_eq!(v.top_index(), 7);
    }

    #[test]
    fn test_fit_after_list_shrinks() {
        let mut v = ViewportScroller::new();
        v.select(8, 10, 4);
        v.fit(3, 4);
        assert_eq!(v.selected_index(), 2);
        assert_invariant(&v, 3, 4);
    }

    #[test]
    fn test_first_last() {
        let mut v = ViewportScroller::new();
        v.move_to_last(12, 5);
        assert_eq!(v.selected_index(), 11);
        assert_eq!(v.top_index(), 7);

        v.move_to_first(12);
        assert_eq!(v.selected_index(), 0);
        assert_eq!(v.top_index(), 0);
    }
}

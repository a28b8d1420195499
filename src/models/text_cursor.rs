use unicode_width::UnicodeWidthChar;

/// 한 줄 텍스트 편집 상태
///
/// 커서는 문자 경계에 있는 바이트 오프셋으로 저장하며, 외부에는 문자 인덱스로 노출한다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCursor {
    text: String,
    cursor_pos: usize,
}

/// 렌더링용 텍스트 창
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWindow<'a> {
    /// 화면에 그릴 부분 문자열
    pub text: &'a str,
    /// 창 시작 문자 인덱스
    pub start: usize,
    /// 창 기준 커서 표시 열
    pub cursor_col: usize,
}

impl TextCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 텍스트로 생성 (커서는 끝)
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut cursor = Self::new();
        cursor.set_text(text);
        cursor
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 문자 단위 길이
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// 커서 위치 (문자 인덱스)
    pub fn cursor_pos(&self) -> usize {
        self.text[..self.cursor_pos].chars().count()
    }

    /// 텍스트 교체 후 커서를 끝으로
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor_pos = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_pos = 0;
    }

    /// 커서를 문자 인덱스로 이동 (텍스트 길이로 제한)
    pub fn set_cursor(&mut self, char_index: usize) {
        self.cursor_pos = self.byte_offset(char_index);
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// 백스페이스
    pub fn erase_before_cursor(&mut self) {
        if let Some(prev) = self.prev_char_start() {
            self.text.remove(prev);
            self.cursor_pos = prev;
        }
    }

    /// Delete 키
    pub fn delete_at_cursor(&mut self) {
        if self.cursor_pos < self.text.len() {
            self.text.remove(self.cursor_pos);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_char_start() {
            self.cursor_pos = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor_pos..].chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    pub fn jump_to_start(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor_pos = self.text.len();
    }

    /// 커서 앞 단어 삭제 (Ctrl+W)
    ///
    /// 커서 바로 앞의 구분자들과 그 앞 단어를 함께 지운다. 경로에서는 마지막 구성요소 하나.
    pub fn delete_prev_word(&mut self) {
        let head = self.text[..self.cursor_pos].trim_end_matches(is_word_delimiter);
        let word_start = head
            .char_indices()
            .rev()
            .find(|(_, c)| is_word_delimiter(*c))
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);

        self.text.replace_range(word_start..self.cursor_pos, "");
        self.cursor_pos = word_start;
    }

    /// 너비 `viewport_width`(표시 열) 창 계산
    ///
    /// 시작 문자는 문자 수 기준으로 정한다. 텍스트가 창보다 길면 커서가 마지막
    /// `viewport_width` 문자 안에 있을 때는 끝부분을, 아니면 커서 위치부터 보여준다.
    /// 넓은 문자 때문에 커서 열이 창을 넘으면 시작을 앞으로 당기고, 끝은 열 너비로 자른다.
    /// 항상 `cursor_col <= viewport_width`이고 창 텍스트의 표시 너비도 그 이하다.
    pub fn window(&self, viewport_width: usize) -> TextWindow<'_> {
        let len = self.len();
        let cursor = self.cursor_pos();

        let mut start = if viewport_width == 0 || len <= viewport_width {
            0
        } else {
            cursor.min(len - viewport_width)
        };

        let widths: Vec<usize> = self.text.chars().map(char_width).collect();
        let mut cursor_col: usize = widths[start..cursor].iter().sum();
        while cursor_col > viewport_width {
            cursor_col -= widths[start];
            start += 1;
        }

        let mut stop = start;
        let mut used = 0;
        while stop < len && used + widths[stop] <= viewport_width {
            used += widths[stop];
            stop += 1;
        }

        TextWindow {
            text: &self.text[self.byte_offset(start)..self.byte_offset(stop)],
            start,
            cursor_col,
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn prev_char_start(&self) -> Option<usize> {
        self.text[..self.cursor_pos]
            .chars()
            .next_back()
            .map(|c| self.cursor_pos - c.len_utf8())
    }
}

impl TextWindow<'_> {
    /// 창 기준 표시 열을 전체 문자 인덱스로 변환
    ///
    /// 넓은 문자의 오른쪽 칸을 누르면 그 문자 앞을 가리킨다. 텍스트 끝을 넘으면 창의 끝.
    pub fn char_index_at(&self, col: usize) -> usize {
        let mut used = 0;
        let mut offset = 0;
        for c in self.text.chars() {
            let width = char_width(c);
            if used + width > col {
                break;
            }
            used += width;
            offset += 1;
        }
        self.start + offset
    }
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

fn is_word_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '/' | '\\' | '.' | '-' | '_' | ':')
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line editable text field. The cursor is a byte offset that always
/// sits on a grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents and put the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        self.buffer = value.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => self.cursor = 0,
            (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.buffer.len()
            }
            // Kill to start of line
            (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
                self.buffer.drain(..self.cursor);
                self.cursor = 0;
            }
            // Kill to end of line
            (m, KeyCode::Char('k')) if m.contains(KeyModifiers::CONTROL) => {
                self.buffer.truncate(self.cursor);
            }
            (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => {
                let start = word_start_before(&self.buffer, self.cursor);
                self.buffer.drain(start..self.cursor);
                self.cursor = start;
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                // A combining mark can merge into the previous grapheme
                self.cursor = self.snap_to_boundary(self.cursor);
            }
            (_, KeyCode::Backspace) => {
                if let Some(prev) = prev_boundary(&self.buffer, self.cursor) {
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            (_, KeyCode::Delete) => {
                if let Some(next) = next_boundary(&self.buffer, self.cursor) {
                    self.buffer.drain(self.cursor..next);
                }
            }
            (_, KeyCode::Left) => {
                if let Some(prev) = prev_boundary(&self.buffer, self.cursor) {
                    self.cursor = prev;
                }
            }
            (_, KeyCode::Right) => {
                if let Some(next) = next_boundary(&self.buffer, self.cursor) {
                    self.cursor = next;
                }
            }
            (_, KeyCode::Home) => self.cursor = 0,
            (_, KeyCode::End) => self.cursor = self.buffer.len(),
            _ => return false,
        }
        true
    }

    /// Display column of the cursor, in terminal cells
    pub fn cursor_col(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// Byte offset of the first grapheme shown in a field `width` cells wide,
    /// chosen so the cursor (plus one cell for it) stays visible.
    pub fn scroll_start(&self, width: usize) -> usize {
        let budget = width.saturating_sub(1);
        let mut used = 0;
        let mut start = self.cursor;
        for (i, g) in self.buffer[..self.cursor].grapheme_indices(true).rev() {
            used += g.width();
            if used > budget {
                break;
            }
            start = i;
        }
        start
    }

    fn snap_to_boundary(&self, offset: usize) -> usize {
        self.buffer
            .grapheme_indices(true)
            .map(|(i, g)| i + g.len())
            .find(|&end| end >= offset)
            .unwrap_or(self.buffer.len())
    }
}

fn prev_boundary(s: &str, offset: usize) -> Option<usize> {
    s[..offset].grapheme_indices(true).next_back().map(|(i, _)| i)
}

fn next_boundary(s: &str, offset: usize) -> Option<usize> {
    s[offset..]
        .graphemes(true)
        .next()
        .map(|g| offset + g.len())
}

/// Start of the whitespace-delimited word ending at `offset`
fn word_start_before(s: &str, offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..offset].grapheme_indices(true).collect();
    let is_space = |g: &str| g.chars().all(char::is_whitespace);
    let mut idx = graphemes.len();
    while idx > 0 && is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(offset, |(i, _)| *i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) {
        input.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(input: &mut TextInput, c: char) {
        input.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::default();
        for c in s.chars() {
            press(&mut input, KeyCode::Char(c));
        }
        input
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = typed("helo");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Char('l'));
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn shifted_characters_insert() {
        let mut input = TextInput::default();
        input.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(input.value(), "A");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut input = typed("ok 👍🏽");
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "ok ");
        press(&mut input, KeyCode::Backspace);
        press(&mut input, KeyCode::Backspace);
        press(&mut input, KeyCode::Backspace);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn delete_removes_after_cursor() {
        let mut input = typed("abc");
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Delete);
        assert_eq!(input.value(), "bc");
        press(&mut input, KeyCode::End);
        press(&mut input, KeyCode::Delete);
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn combining_mark_keeps_cursor_on_boundary() {
        let input = typed("e\u{301}");
        assert_eq!(input.cursor(), input.value().len());
        assert_eq!(input.cursor_col(), 1);
    }

    #[test]
    fn kill_and_word_delete() {
        let mut input = typed("buy more milk  ");
        ctrl(&mut input, 'w');
        assert_eq!(input.value(), "buy more ");
        ctrl(&mut input, 'a');
        press(&mut input, KeyCode::Right);
        ctrl(&mut input, 'k');
        assert_eq!(input.value(), "b");
        ctrl(&mut input, 'e');
        ctrl(&mut input, 'u');
        assert_eq!(input.value(), "");
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut input = TextInput::default();
        input.set_value("Write spec");
        assert_eq!(input.cursor(), 10);
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn unhandled_keys_are_reported() {
        let mut input = TextInput::default();
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)));
    }

    #[test]
    fn scroll_start_keeps_cursor_visible() {
        let input = typed("abcdefghij");
        assert_eq!(input.scroll_start(20), 0);
        // 5 cells: 4 chars of text plus the cursor cell
        assert_eq!(input.scroll_start(5), 6);

        let wide = typed("日本語");
        assert_eq!(wide.cursor_col(), 6);
        assert_eq!(wide.scroll_start(4), 6);
    }
}

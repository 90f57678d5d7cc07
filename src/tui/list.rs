use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Scrollable selection over task ids, in display order.
///
/// Holds ids rather than tasks so callers always resolve the selection
/// against the task list by identity.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    items: Vec<u64>,
    cursor: usize,
    scroll_offset: usize,
    width: u16,
    height: u16,
}

impl TaskList {
    pub fn new(items: Vec<u64>) -> Self {
        TaskList {
            items,
            ..Default::default()
        }
    }

    /// Replace the displayed ids, keeping the cursor on the same id when it
    /// is still present
    pub fn set_items(&mut self, items: Vec<u64>) {
        let selected = self.selected();
        self.items = items;
        match selected.and_then(|id| self.items.iter().position(|&i| i == id)) {
            Some(pos) => self.cursor = pos,
            None => self.cursor = self.cursor.min(self.items.len().saturating_sub(1)),
        }
        self.scroll_to_cursor();
    }

    pub fn items(&self) -> &[u64] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id under the cursor
    pub fn selected(&self) -> Option<u64> {
        self.items.get(self.cursor).copied()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Move the cursor onto `id`. Returns false if it isn't listed.
    pub fn select(&mut self, id: u64) -> bool {
        match self.items.iter().position(|&i| i == id) {
            Some(pos) => {
                self.cursor = pos;
                self.scroll_to_cursor();
                true
            }
            None => false,
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.scroll_to_cursor();
    }

    /// Handle a navigation key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let page = (self.height as i64).max(1);
        match (key.modifiers, key.code) {
            (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => self.move_cursor(-1),
            (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => self.move_cursor(1),
            (_, KeyCode::PageUp) => self.move_cursor(-page),
            (_, KeyCode::PageDown) => self.move_cursor(page),
            (_, KeyCode::Home) | (KeyModifiers::NONE, KeyCode::Char('g')) => {
                self.move_cursor(i64::MIN / 2)
            }
            (_, KeyCode::End) | (_, KeyCode::Char('G')) => self.move_cursor(i64::MAX / 2),
            _ => return false,
        }
        true
    }

    fn move_cursor(&mut self, delta: i64) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() as i64 - 1;
        self.cursor = (self.cursor as i64).saturating_add(delta).clamp(0, last) as usize;
        self.scroll_to_cursor();
    }

    /// Keep the cursor row inside the viewport
    fn scroll_to_cursor(&mut self) {
        let height = self.height.max(1) as usize;
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        let max_offset = self.items.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

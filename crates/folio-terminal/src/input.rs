//! Draft line editing, submitted-line recall and tab completion.

use std::collections::VecDeque;

use crate::interpreter::CommandRegistry;

/// Previously submitted lines, most recent first.
///
/// `cursor` is `None` while the user is not browsing. `older` walks
/// toward older lines and stops at the oldest; `newer` walks back toward the
/// newest and leaves browsing mode once it passes the newest line.
#[derive(Debug, Clone)]
pub struct RecallBuffer {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: Option<usize>,
}

impl RecallBuffer {
    /// A buffer holding at most `capacity` lines (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            cursor: None,
        }
    }

    /// Record a submitted line, evicting the oldest once full. Resets the
    /// cursor. Consecutive duplicates are kept.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
        self.entries.truncate(self.capacity);
        self.cursor = None;
    }

    /// Step toward older lines. Returns the line under the cursor, or
    /// `None` if the buffer is empty.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(last),
        };
        self.cursor = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Step toward newer lines. `None` means browsing ended and the draft
    /// should be emptied.
    pub fn newer(&mut self) -> Option<&str> {
        match self.cursor {
            None | Some(0) => {
                self.cursor = None;
                None
            },
            Some(i) => {
                self.cursor = Some(i - 1);
                self.entries.get(i - 1).map(String::as_str)
            },
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// The editable prompt line.
#[derive(Debug, Clone)]
pub struct InputLine {
    draft: String,
    recall: RecallBuffer,
}

impl InputLine {
    pub fn new(recall_capacity: usize) -> Self {
        Self {
            draft: String::new(),
            recall: RecallBuffer::new(recall_capacity),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub fn recall(&self) -> &RecallBuffer {
        &self.recall
    }

    pub fn recall_mut(&mut self) -> &mut RecallBuffer {
        &mut self.recall
    }

    /// Take the trimmed draft for submission and empty it. Blank drafts
    /// are left untouched and yield `None`.
    pub fn take_submission(&mut self) -> Option<String> {
        let line = self.draft.trim();
        if line.is_empty() {
            return None;
        }
        let line = line.to_string();
        self.draft.clear();
        Some(line)
    }

    /// Replace the draft with the previous recalled line.
    pub fn recall_previous(&mut self) {
        if let Some(line) = self.recall.older() {
            self.draft = line.to_string();
        }
    }

    /// Replace the draft with the next recalled line, or empty it.
    pub fn recall_next(&mut self) {
        match self.recall.newer() {
            Some(line) => self.draft = line.to_string(),
            None => self.draft.clear(),
        }
    }

    /// Tab completion against command names and aliases.
    pub fn complete(&mut self, registry: &CommandRegistry) -> bool {
        if self.draft.is_empty() {
            return false;
        }
        match registry.complete(&self.draft) {
            Some(name) => {
                self.draft = name.to_string();
                true
            },
            None => false,
        }
    }
}

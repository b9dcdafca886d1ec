//! Search box state.
//!
//! The box keeps its text between edits. Every edit reports whether the
//! text changed so the caller can rerun the filter while the user types.

/// Search box state.
#[derive(Debug, Default)]
pub struct SearchState {
    is_active: bool,
    buffer: String,
}

impl SearchState {
    /// Create a new search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the box has keyboard focus.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Give the box keyboard focus. Existing text is kept.
    pub fn start(&mut self) {
        self.is_active = true;
    }

    /// Leave the box, keeping its text.
    pub fn finish(&mut self) {
        self.is_active = false;
    }

    /// Add a character to the search text.
    pub fn input(&mut self, c: char) -> bool {
        self.buffer.push(c);
        true
    }

    /// Remove the last character from the search text.
    pub fn backspace(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    /// Replace the text, as a programmatic edit would.
    pub fn set(&mut self, text: &str) -> bool {
        if self.buffer == text {
            return false;
        }
        self.buffer = text.to_string();
        true
    }

    /// Empty the box and drop focus.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.is_active = false;
    }

    /// Get the search text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_report_changes() {
        let mut search = SearchState::new();
        search.start();
        assert!(search.input('w'));
        assert!(search.input('i'));
        assert_eq!(search.buffer(), "wi");
        assert!(search.backspace());
        assert!(search.backspace());
        assert!(!search.backspace());
    }

    #[test]
    fn finishing_keeps_text() {
        let mut search = SearchState::new();
        search.start();
        search.input('x');
        search.finish();
        assert!(!search.is_active());
        assert_eq!(search.buffer(), "x");

        search.start();
        assert_eq!(search.buffer(), "x");
    }

    #[test]
    fn set_and_clear() {
        let mut search = SearchState::new();
        assert!(search.set("wind"));
        assert!(!search.set("wind"));
        search.clear();
        assert_eq!(search.buffer(), "");
    }
}

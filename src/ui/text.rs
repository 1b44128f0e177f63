//! Capped text entry

/// A string that never holds more than `cap` characters.
///
/// Input past the cap is dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedText {
    text: String,
    cap: usize,
}

impl BoundedText {
    pub fn new(cap: usize) -> Self {
        Self {
            text: String::new(),
            cap,
        }
    }

    /// Keep the first `cap` characters of `text`
    pub fn from_str_truncated(text: &str, cap: usize) -> Self {
        Self {
            text: text.chars().take(cap).collect(),
            cap,
        }
    }

    /// Append `c`; returns false when full
    pub fn push(&mut self, c: char) -> bool {
        if self.len() >= self.cap {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_past_cap_is_dropped() {
        let mut text = BoundedText::new(3);
        assert!(text.push('a'));
        assert!(text.push('b'));
        assert!(text.push('c'));
        assert!(!text.push('d'));
        assert_eq!(text.as_str(), "abc");
    }

    #[test]
    fn test_pop_removes_last() {
        let mut text = BoundedText::from_str_truncated("héllo", 99);
        assert_eq!(text.pop(), Some('o'));
        assert_eq!(text.as_str(), "héll");
        assert_eq!(text.len(), 4);
        text.clear();
        assert_eq!(text.pop(), None);
        assert!(text.is_empty());
    }

    #[test]
    fn test_truncation_counts_chars() {
        let text = BoundedText::from_str_truncated("ééééé", 2);
        assert_eq!(text.as_str(), "éé");
        assert_eq!(text.len(), 2);
    }
}

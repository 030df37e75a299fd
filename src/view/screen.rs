//! Rendered screen fragments keyed by stable identifiers.

/// One rendered text fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    /// Stable identifier the display harness keys on.
    pub id: &'static str,

    /// Rendered text content.
    pub text: String,
}

/// A rendered game-over screen.
///
/// Fragment presence is part of the contract: an absent fragment means the
/// corresponding control is not shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    fragments: Vec<TextFragment>,
}

impl Screen {
    pub(crate) fn push(&mut self, id: &'static str, text: String) {
        self.fragments.push(TextFragment { id, text });
    }

    /// All fragments in render order.
    pub fn fragments(&self) -> &[TextFragment] {
        &self.fragments
    }

    /// Text of the fragment with `id`, if present.
    pub fn fragment(&self, id: &str) -> Option<&str> {
        self.fragments
            .iter()
            .find(|fragment| fragment.id == id)
            .map(|fragment| fragment.text.as_str())
    }

    /// Check whether a fragment with `id` is present.
    pub fn has(&self, id: &str) -> bool {
        self.fragment(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_lookup() {
        let mut screen = Screen::default();
        screen.push("text-score", "yourScore: 7".to_string());

        assert_eq!(screen.fragment("text-score"), Some("yourScore: 7"));
        assert_eq!(screen.fragment("submit-btn"), None);
        assert!(screen.has("text-score"));
        assert!(!screen.has("submit-btn"));
    }

    #[test]
    fn test_fragments_preserve_render_order() {
        let mut screen = Screen::default();
        screen.push("a", "1".to_string());
        screen.push("b", "2".to_string());

        let ids: Vec<_> = screen.fragments().iter().map(|f| f.id).collect();
        assert_eq!(ids, ["a", "b"]);
    }
}

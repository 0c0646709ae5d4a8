//! Caption fields and the editing rules applied to them.

/// One of the two caption overlays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaptionField {
    Top,
    Bottom,
}

impl CaptionField {
    /// The default text shown before the user edits the field
    pub fn placeholder(&self) -> &'static str {
        match self {
            CaptionField::Top => "TOP",
            CaptionField::Bottom => "BOTTOM",
        }
    }

    pub fn all() -> &'static [CaptionField] {
        &[CaptionField::Top, CaptionField::Bottom]
    }
}

/// Returns true when `text` is one of the placeholder captions.
///
/// Both fields share the same rule, so the top field starting an edit with
/// "BOTTOM" in it is also cleared.
pub fn is_placeholder(text: &str) -> bool {
    CaptionField::all()
        .iter()
        .any(|field| field.placeholder() == text)
}

/// Text a field should hold once editing begins.
pub fn begin_editing(text: &str) -> String {
    if is_placeholder(text) {
        String::new()
    } else {
        text.to_string()
    }
}

/// Text a field should hold once editing ends.
pub fn end_editing(text: &str) -> String {
    text.to_uppercase()
}

/// The current top and bottom captions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionPair {
    top: String,
    bottom: String,
}

impl Default for CaptionPair {
    fn default() -> Self {
        Self {
            top: CaptionField::Top.placeholder().to_string(),
            bottom: CaptionField::Bottom.placeholder().to_string(),
        }
    }
}

impl CaptionPair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: CaptionField) -> &str {
        match field {
            CaptionField::Top => &self.top,
            CaptionField::Bottom => &self.bottom,
        }
    }

    pub fn set(&mut self, field: CaptionField, text: impl Into<String>) {
        let text = text.into();
        match field {
            CaptionField::Top => self.top = text,
            CaptionField::Bottom => self.bottom = text,
        }
    }

    pub fn top(&self) -> &str {
        &self.top
    }

    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    /// Restore both captions to their placeholders
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_editing_clears_placeholders() {
        assert_eq!(begin_editing("TOP"), "");
        assert_eq!(begin_editing("BOTTOM"), "");
    }

    #[test]
    fn test_begin_editing_keeps_user_text() {
        assert_eq!(begin_editing("WOW"), "WOW");
        assert_eq!(begin_editing("top"), "top");
        assert_eq!(begin_editing("TOP "), "TOP ");
        assert_eq!(begin_editing(""), "");
    }

    #[test]
    fn test_end_editing_uppercases() {
        assert_eq!(end_editing("hello"), "HELLO");
        assert_eq!(end_editing("Top"), "TOP");
        assert_eq!(end_editing(""), "");
        assert_eq!(end_editing("straße"), "STRASSE");
    }

    #[test]
    fn test_end_editing_is_idempotent() {
        let once = end_editing("mixed Case 42");
        assert_eq!(end_editing(&once), once);
    }

    #[test]
    fn test_caption_pair_defaults_and_reset() {
        let mut pair = CaptionPair::new();
        assert_eq!(pair.top(), "TOP");
        assert_eq!(pair.bottom(), "BOTTOM");
        assert!(pair.is_default());

        pair.set(CaptionField::Top, "WOW");
        assert_eq!(pair.get(CaptionField::Top), "WOW");
        assert!(!pair.is_default());

        pair.reset();
        assert!(pair.is_default());
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder("TOP"));
        assert!(is_placeholder("BOTTOM"));
        assert!(!is_placeholder("Bottom"));
        assert!(!is_placeholder(""));
    }
}

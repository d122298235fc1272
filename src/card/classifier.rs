//! Content-type classification for face values.

/// Default length above which plain text is shown in the long-text slot.
pub const DEFAULT_LONG_TEXT_THRESHOLD: usize = 20;

const URL_SCHEMES: [&str; 3] = ["http://", "https://", "data:"];

/// Answers what kind of content a raw value is.
///
/// All methods are total: absent or empty input is simply "no".
pub trait ContentClassifier: Send {
    fn is_url(&self, value: Option<&str>) -> bool;

    fn is_string(&self, value: Option<&str>) -> bool;

    /// True when the value is longer than the long-text threshold.
    fn exceeds_threshold(&self, value: Option<&str>) -> bool;
}

/// Which sub-view a value belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image,
    ShortText,
    LongText,
}

/// Classify with the fixed precedence: URL, then long text, then short text.
pub fn classify(classifier: &dyn ContentClassifier, value: Option<&str>) -> Option<ContentKind> {
    if classifier.is_url(value) {
        Some(ContentKind::Image)
    } else if classifier.is_string(value) {
        if classifier.exceeds_threshold(value) {
            Some(ContentKind::LongText)
        } else {
            Some(ContentKind::ShortText)
        }
    } else {
        None
    }
}

/// Stock classifier.
#[derive(Debug, Clone)]
pub struct DataController {
    long_text_threshold: usize,
}

impl DataController {
    pub fn new(long_text_threshold: usize) -> Self {
        Self {
            long_text_threshold,
        }
    }
}

impl Default for DataController {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_TEXT_THRESHOLD)
    }
}

impl ContentClassifier for DataController {
    fn is_url(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        // Padded values would reach the image source verbatim.
        if value.chars().any(char::is_whitespace) {
            return false;
        }
        URL_SCHEMES.iter().any(|scheme| {
            value.len() > scheme.len()
                && value.is_char_boundary(scheme.len())
                && value[..scheme.len()].eq_ignore_ascii_case(scheme)
        })
    }

    fn is_string(&self, value: Option<&str>) -> bool {
        value.is_some_and(|v| !v.trim().is_empty())
    }

    fn exceeds_threshold(&self, value: Option<&str>) -> bool {
        value.is_some_and(|v| v.chars().count() > self.long_text_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_need_a_known_scheme_and_a_body() {
        let c = DataController::default();
        assert!(c.is_url(Some("https://x/y.png")));
        assert!(c.is_url(Some("HTTP://example.com")));
        assert!(c.is_url(Some("data:image/png;base64,AAAA")));
        assert!(!c.is_url(Some("https://")));
        assert!(!c.is_url(Some("ftp://x/y")));
        assert!(!c.is_url(Some("https://x/a b.png")));
        assert!(!c.is_url(Some(" http://a/b.png")));
        assert!(!c.is_url(Some("http://a/b.png\n")));
        assert!(!c.is_url(None));
    }

    #[test]
    fn absent_and_blank_values_are_not_strings() {
        let c = DataController::default();
        assert!(!c.is_string(None));
        assert!(!c.is_string(Some("")));
        assert!(!c.is_string(Some("   ")));
        assert!(c.is_string(Some("Dog")));
        assert!(!c.exceeds_threshold(None));
    }

    #[test]
    fn classify_follows_precedence() {
        let c = DataController::default();
        assert_eq!(classify(&c, Some("https://x/y.png")), Some(ContentKind::Image));
        assert_eq!(
            classify(&c, Some("abcdefghijklmnopqrstuvwxy")),
            Some(ContentKind::LongText)
        );
        assert_eq!(classify(&c, Some("Hello")), Some(ContentKind::ShortText));
        assert_eq!(classify(&c, Some("")), None);
        assert_eq!(classify(&c, None), None);
    }

    #[test]
    fn threshold_is_exclusive_and_counts_chars() {
        let c = DataController::new(5);
        assert!(!c.exceeds_threshold(Some("12345")));
        assert!(c.exceeds_threshold(Some("123456")));
        assert!(!c.exceeds_threshold(Some("ééééé")));
    }
}

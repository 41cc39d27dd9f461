/// Structural selector matching elements by tag name, class, or both.
///
/// Covers the query forms the board view needs (`"button"`, `".tag"`,
/// `"a.tag"`); anything fancier belongs to the host's own style engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    class: Option<String>,
}

impl Selector {
    /// Match elements with the given tag name.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            class: None,
        }
    }

    /// Match elements carrying the given class.
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            tag: None,
            class: Some(class.into()),
        }
    }

    /// Additionally require the given class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Parse a selector string: `"button"`, `".tag"` or `"a.tag"`.
    /// Returns `None` for empty input or compound class lists.
    pub fn parse(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        if selector.is_empty() {
            return None;
        }

        match selector.split_once('.') {
            None => Some(Self::tag(selector)),
            Some((_, class)) if class.is_empty() || class.contains('.') => None,
            Some(("", class)) => Some(Self::class(class)),
            Some((tag, class)) => Some(Self::tag(tag).with_class(class)),
        }
    }

    pub(crate) fn matches(&self, tag: &str, classes: &[String]) -> bool {
        if let Some(want) = &self.tag {
            if want != tag {
                return false;
            }
        }
        if let Some(want) = &self.class {
            if !classes.iter().any(|c| c == want) {
                return false;
            }
        }
        true
    }
}

//! The contract between the enhancer and the partial-page-update library.
//!
//! The enhancer never talks to the library directly. It only needs a
//! vocabulary: the two lifecycle events fired around a content-replacement
//! request, the region of the page whose content gets replaced, and the
//! declarative attribute marking elements that trigger a request when
//! activated. Any library that speaks this vocabulary works; the default
//! profile is HTMX.

/// Event names and DOM conventions of a partial-page-update library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapVocabulary {
    /// Fired on the originating element just before the request is issued.
    pub before_event: String,
    /// Fired on the same element when the request completes, pass or fail.
    pub after_event: String,
    /// Selector for the region whose content is replaced.
    pub content_region: String,
    /// Attribute marking an element as a fetch-on-click trigger.
    pub trigger_attr: String,
}

impl Default for SwapVocabulary {
    fn default() -> Self {
        Self {
            before_event: "htmx:beforeRequest".to_string(),
            after_event: "htmx:afterRequest".to_string(),
            content_region: "#content".to_string(),
            trigger_attr: "hx-get".to_string(),
        }
    }
}

impl SwapVocabulary {
    /// Selector matching any trigger element inside the content region.
    /// The auto-refresh timer activates the first match.
    pub fn trigger_selector(&self) -> String {
        format!("{} [{}]", self.content_region, self.trigger_attr)
    }

    /// Selector matching a button trigger inside the content region.
    /// The `r` shortcut activates the first match.
    pub fn button_trigger_selector(&self) -> String {
        format!("{} button[{}]", self.content_region, self.trigger_attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_htmx_defaults() {
        let vocabulary = SwapVocabulary::default();

        assert_eq!(vocabulary.before_event, "htmx:beforeRequest");
        assert_eq!(vocabulary.after_event, "htmx:afterRequest");
        assert_eq!(vocabulary.trigger_selector(), "#content [hx-get]");
        assert_eq!(vocabulary.button_trigger_selector(), "#content button[hx-get]");
    }

    #[test]
    fn test_custom_library_profile() {
        let vocabulary = SwapVocabulary {
            before_event: "swap:start".to_string(),
            after_event: "swap:done".to_string(),
            content_region: "#main".to_string(),
            trigger_attr: "data-fetch".to_string(),
        };

        assert_eq!(vocabulary.trigger_selector(), "#main [data-fetch]");
        assert_eq!(vocabulary.button_trigger_selector(), "#main button[data-fetch]");
    }
}

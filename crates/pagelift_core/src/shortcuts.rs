//! Keyboard shortcut resolution.
//!
//! Shortcuts are plain letter keys, so they must never fire while the user
//! is typing. Resolution takes the pressed key, the Ctrl/Meta modifier
//! state, and whether focus currently sits in an editable element; the
//! browser crate gathers those inputs from the `keydown` event and the
//! active element.

/// Path the `h` shortcut navigates to.
pub const HOME_PATH: &str = "/";

/// What a resolved shortcut should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Re-activate the first button trigger in the content region.
    RefreshView,
    /// Full-page navigation to [`HOME_PATH`].
    GoHome,
}

/// Resolve a key press to an action, or `None` when it should be ignored.
///
/// Keys are matched exactly as reported by the event, so `R` (shift held)
/// does not refresh. Ctrl- and Meta-chords are left to the browser.
pub fn resolve(key: &str, ctrl: bool, meta: bool, editing: bool) -> Option<ShortcutAction> {
    if ctrl || meta || editing {
        return None;
    }

    match key {
        "r" => Some(ShortcutAction::RefreshView),
        "h" => Some(ShortcutAction::GoHome),
        _ => None,
    }
}

/// Whether an element with the given tag name (or contenteditable flag)
/// receives typed input.
pub fn is_editable(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || matches!(
            tag_name.to_ascii_uppercase().as_str(),
            "INPUT" | "TEXTAREA" | "SELECT"
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_and_home_resolve() {
        assert_eq!(resolve("r", false, false, false), Some(ShortcutAction::RefreshView));
        assert_eq!(resolve("h", false, false, false), Some(ShortcutAction::GoHome));
    }

    #[test]
    fn test_modifier_chords_ignored() {
        // Ctrl+R / Cmd+R belong to the browser.
        assert_eq!(resolve("r", true, false, false), None);
        assert_eq!(resolve("r", false, true, false), None);
        assert_eq!(resolve("h", true, false, false), None);
        assert_eq!(resolve("h", false, true, false), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(resolve("x", false, false, false), None);
        assert_eq!(resolve("Enter", false, false, false), None);
        // Exact match: shifted capital is not the shortcut.
        assert_eq!(resolve("R", false, false, false), None);
    }

    #[test]
    fn test_suppressed_while_typing() {
        assert_eq!(resolve("r", false, false, true), None);
        assert_eq!(resolve("h", false, false, true), None);
    }

    #[test]
    fn test_editable_elements() {
        assert!(is_editable("INPUT", false));
        assert!(is_editable("input", false));
        assert!(is_editable("TEXTAREA", false));
        assert!(is_editable("SELECT", false));
        assert!(is_editable("DIV", true));
        assert!(!is_editable("DIV", false));
        assert!(!is_editable("BUTTON", false));
    }
}

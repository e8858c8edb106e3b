//! Visual feedback values applied around a partial-page request.

/// Transition applied to the originating element on the pending edge.
pub const FADE_TRANSITION: &str = "opacity 0.2s ease-in-out";

/// Descendant tagged as the refresh icon of a refresh-style button.
pub const REFRESH_ICON_SELECTOR: &str = ".refresh-icon";

/// Descendant holding a button's label text.
pub const BUTTON_TEXT_SELECTOR: &str = ".button-text";

/// Where the originating element stands in the request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
    /// Request issued, response not yet applied.
    Pending,
    /// Request completed. The library fires the after event on failure
    /// too, so this phase does not imply success.
    Settled,
}

impl SwapPhase {
    /// Opacity of the originating element.
    pub fn target_opacity(&self) -> &'static str {
        match self {
            SwapPhase::Pending => "0.7",
            SwapPhase::Settled => "1",
        }
    }

    /// Display value for a refresh-icon descendant.
    pub fn icon_display(&self) -> &'static str {
        match self {
            SwapPhase::Pending => "none",
            SwapPhase::Settled => "block",
        }
    }

    /// Opacity of a button-text descendant, the secondary pending cue.
    pub fn text_opacity(&self) -> &'static str {
        self.target_opacity()
    }
}

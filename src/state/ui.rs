//! Local UI chrome state.

/// Page-level presentation state, independent of conversation data.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}

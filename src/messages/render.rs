//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::EditModal;
use crate::i18n::Labels;
use crate::models::LoadState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Customer store
    pub load: LoadState,
    pub selected_row: usize,
    /// Table title with the customer count already formatted
    pub customers_title: String,

    // Edit modal
    pub modal: Option<EditModal>,
    /// Localized modal title for the customer being edited
    pub modal_title: String,

    // Localized static strings
    pub labels: Labels,

    // Status bar
    pub last_saved: Option<String>,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    pub fn modal_open(&self) -> bool {
        self.modal.is_some()
    }
}

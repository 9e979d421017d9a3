//! App state - pure data structure with no I/O logic

use fluent_bundle::FluentArgs;

use crate::form::{FormErrors, FormField, FormInputs};
use crate::i18n::{I18n, Labels};
use crate::messages::RenderState;
use crate::models::LoadState;

/// The single edit dialog, reused across rows
#[derive(Clone, Debug, PartialEq)]
pub struct EditModal {
    pub customer_id: u64,
    pub inputs: FormInputs,
    pub errors: FormErrors,
    pub active_field: FormField,
    pub cursor_position: usize,
}

/// A valid submit, kept in memory only
#[derive(Clone, Debug)]
pub struct SavedEdit {
    pub customer_id: u64,
    pub inputs: FormInputs,
    pub saved_at: chrono::DateTime<chrono::Utc>,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Customer store
    pub customers_url: String,
    pub load: LoadState,
    pub selected_row: usize,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    /// Cleared on teardown; late responses are dropped
    pub mounted: bool,

    // Edit workflow
    pub modal: Option<EditModal>,
    pub saved_edits: Vec<SavedEdit>,

    // Localization
    pub i18n: I18n,
    pub labels: Labels,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new(customers_url: impl Into<String>, i18n: I18n) -> Self {
        let labels = Labels::from_i18n(&i18n);
        AppState {
            customers_url: customers_url.into(),
            load: LoadState::Loading,
            selected_row: 0,
            next_request_id: 1,
            pending_request_id: None,
            mounted: false,
            modal: None,
            saved_edits: Vec::new(),
            i18n,
            labels,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Number of customers currently listed
    pub fn customer_count(&self) -> usize {
        self.load.customers().map(|c| c.len()).unwrap_or(0)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let mut count_args = FluentArgs::new();
        count_args.set("count", self.customer_count());
        let customers_title = self.i18n.tr_args("customers-title", &count_args);

        let modal_title = match &self.modal {
            Some(modal) => {
                let mut args = FluentArgs::new();
                args.set("id", modal.customer_id);
                self.i18n.tr_args("modal-title", &args)
            }
            None => String::new(),
        };

        let last_saved = self.saved_edits.last().map(|edit| {
            let mut args = FluentArgs::new();
            args.set("name", edit.inputs.name.clone());
            args.set(
                "time",
                edit.saved_at
                    .with_timezone(&chrono::Local)
                    .format("%H:%M:%S")
                    .to_string(),
            );
            self.i18n.tr_args("status-saved", &args)
        });

        RenderState {
            load: self.load.clone(),
            selected_row: self.selected_row,
            customers_title,
            modal: self.modal.clone(),
            modal_title,
            labels: self.labels.clone(),
            last_saved,
            show_help: self.show_help,
        }
    }
}

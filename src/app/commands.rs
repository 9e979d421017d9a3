//! Command handlers - business logic for processing UI events

use crate::app::state::{EditModal, SavedEdit};
use crate::app::AppState;
use crate::form::{FormErrors, FormField, FormInputs};
use crate::i18n::Labels;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::LoadState;

impl AppState {
    // ========================
    // Lifecycle
    // ========================

    /// Mark the store mounted and issue the one customer fetch.
    /// Returns `None` when already mounted.
    pub fn mount(&mut self) -> Option<NetworkCommand> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.load = LoadState::Loading;

        let id = self.next_id();
        self.pending_request_id = Some(id);
        tracing::info!(id, url = %self.customers_url, "Fetching customers");
        Some(NetworkCommand::FetchCustomers {
            id,
            url: self.customers_url.clone(),
        })
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pending_request_id = None;
    }

    /// Apply a network response. Ignored after unmount or when stale.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        let response_id = response.id();
        if !self.mounted || self.pending_request_id != Some(response_id) {
            tracing::debug!(id = response_id, mounted = self.mounted, "Dropping response");
            return;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::CustomersLoaded { customers, time_ms, .. } => {
                tracing::info!(count = customers.len(), time_ms, "Customers loaded");
                self.selected_row = 0;
                self.load = LoadState::Loaded(customers);
            }
            NetworkResponse::Error { message, time_ms, .. } => {
                tracing::warn!(%message, time_ms, "Customer fetch failed");
                self.load = LoadState::Errored(message);
            }
        }
    }

    // ========================
    // Customer list
    // ========================

    pub fn next_row(&mut self) {
        let count = self.customer_count();
        if count > 0 {
            self.selected_row = (self.selected_row + 1) % count;
        }
    }

    pub fn prev_row(&mut self) {
        let count = self.customer_count();
        if count > 0 {
            self.selected_row = self.selected_row.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Copy the customer at `index` into the form and open the modal
    pub fn open_editor(&mut self, index: usize) {
        let Some(customer) = self.load.customers().and_then(|c| c.get(index)) else {
            return;
        };
        let inputs = FormInputs::from_customer(customer);
        let cursor_position = inputs.value(FormField::Name).len();
        self.modal = Some(EditModal {
            customer_id: customer.id,
            inputs,
            errors: FormErrors::default(),
            active_field: FormField::Name,
            cursor_position,
        });
        self.selected_row = index;
    }

    pub fn edit_selected(&mut self) {
        self.open_editor(self.selected_row);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // ========================
    // Form navigation and input
    // ========================

    fn focus_field(modal: &mut EditModal, field: FormField) {
        modal.active_field = field;
        modal.cursor_position = modal.inputs.value(field).len();
    }

    pub fn next_field(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            let field = modal.active_field.next();
            Self::focus_field(modal, field);
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            let field = modal.active_field.prev();
            Self::focus_field(modal, field);
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        let field = modal.active_field;
        if field == FormField::Channel {
            if c == ' ' {
                modal.inputs.channel = Some(modal.inputs.channel.map(|ch| ch.next()).unwrap_or_default());
                modal.errors.clear(field);
            }
            return;
        }

        let cursor_pos = modal.cursor_position;
        if let Some(input) = modal.inputs.text_mut(field) {
            if cursor_pos <= input.len() {
                input.insert(cursor_pos, c);
                modal.cursor_position = cursor_pos + c.len_utf8();
                modal.errors.clear(field);
            }
        }
    }

    pub fn delete_char(&mut self) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        let field = modal.active_field;
        if field == FormField::Channel {
            modal.inputs.channel = None;
            return;
        }

        let cursor_pos = modal.cursor_position;
        if cursor_pos == 0 {
            return;
        }
        if let Some(input) = modal.inputs.text_mut(field) {
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            modal.cursor_position = prev_pos;
        }
    }

    pub fn move_cursor_left(&mut self) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        if modal.active_field == FormField::Channel {
            modal.inputs.channel = Some(modal.inputs.channel.map(|ch| ch.prev()).unwrap_or_default());
            modal.errors.clear(FormField::Channel);
            return;
        }
        let input = modal.inputs.value(modal.active_field);
        if modal.cursor_position > 0 {
            modal.cursor_position = input[..modal.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        if modal.active_field == FormField::Channel {
            modal.inputs.channel = Some(modal.inputs.channel.map(|ch| ch.next()).unwrap_or_default());
            modal.errors.clear(FormField::Channel);
            return;
        }
        let input = modal.inputs.value(modal.active_field);
        if modal.cursor_position < input.len() {
            modal.cursor_position = input[modal.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| modal.cursor_position + i)
                .unwrap_or(input.len());
        }
    }

    /// Validate and "save" the form. Returns true when the modal closed.
    pub fn submit(&mut self) -> bool {
        let Some(modal) = self.modal.as_mut() else {
            return false;
        };

        match modal.inputs.validate() {
            Ok(()) => {
                // No write-back endpoint: the payload is only logged
                let payload = serde_json::to_string(&modal.inputs).unwrap_or_default();
                tracing::info!(customer_id = modal.customer_id, %payload, "Customer edit submitted");
                self.saved_edits.push(SavedEdit {
                    customer_id: modal.customer_id,
                    inputs: modal.inputs.clone(),
                    saved_at: chrono::Utc::now(),
                });
                self.modal = None;
                true
            }
            Err(errors) => {
                tracing::debug!(missing = errors.len(), "Customer edit rejected");
                if let Some(first) = errors.first() {
                    Self::focus_field(modal, first);
                }
                modal.errors = errors;
                false
            }
        }
    }

    // ========================
    // Localization
    // ========================

    pub fn toggle_language(&mut self) {
        let locale = self.i18n.toggle_locale().to_string();
        self.labels = Labels::from_i18n(&self.i18n);
        tracing::info!(%locale, "Language switched");
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

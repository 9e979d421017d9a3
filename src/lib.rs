//! # Customer Desk
//!
//! A terminal front-end for a remote customer list.
//!
//! ## Features
//! - Fetches `{ "customers": [...] }` from a JSON endpoint once on start
//! - Customer table with one edit trigger per row
//! - Modal edit form with required-field validation
//! - Runtime language switching (Fluent catalogs)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod models;
pub mod form;
pub mod i18n;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{Channel, Customer, CustomerList, LoadState};
pub use form::{FormErrors, FormField, FormInputs};
pub use i18n::{I18n, Labels};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;
pub use config::Config;

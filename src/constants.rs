//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default endpoint serving `{ "customers": [...] }`
pub const DEFAULT_CUSTOMERS_URL: &str =
    "https://rawgit.com/wvchallenges/se-exp-challenge-invoice/master/settings.json";

/// Default HTTP timeout for the customer fetch, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Locale used when nothing else matches
pub const DEFAULT_LOCALE: &str = "en-US";

/// Application name
pub const APP_NAME: &str = "Customer Desk";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "customer-desk";

/// Log file written next to the working directory
pub const LOG_FILE_NAME: &str = "customer-desk.log";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

//! Localization backed by Fluent catalogs embedded at build time.
//!
//! Every user-facing static string goes through [`I18n::tr`]. The active
//! locale can be switched at runtime; [`Labels`] caches the resolved strings
//! so the render layer never touches Fluent directly.

use std::collections::HashMap;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

use crate::constants::DEFAULT_LOCALE;
use crate::form::FormField;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Catalogs;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None)
    }
}

impl I18n {
    /// Load all embedded catalogs and pick the starting locale:
    /// requested tag, then the OS locale, then `en-US`.
    pub fn new(requested: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Catalogs::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|tag| tag.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Catalogs::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(res) => res,
                Err((res, errors)) => {
                    tracing::warn!(%locale, ?errors, "Catalog has syntax errors");
                    res
                }
            };

            let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
            // Unicode isolation marks show up as garbage in a terminal
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%locale, ?errors, "Catalog has conflicting entries");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(|l| l.to_string());

        let fallback: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let current_locale =
            resolve_locale(requested, sys_locale::get_locale(), &available_locales)
                .unwrap_or(fallback);
        tracing::debug!(locale = %current_locale, available = available_locales.len(), "Localization ready");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Switch to `tag` if a catalog exists for it. Returns whether it switched.
    pub fn set_locale(&mut self, tag: &str) -> bool {
        match tag.parse::<LanguageIdentifier>() {
            Ok(locale) if self.bundles.contains_key(&locale) => {
                self.current_locale = locale;
                true
            }
            _ => false,
        }
    }

    /// Cycle to the next available locale (sorted order)
    pub fn toggle_locale(&mut self) -> &LanguageIdentifier {
        if !self.available_locales.is_empty() {
            let next = self
                .available_locales
                .iter()
                .position(|l| *l == self.current_locale)
                .map(|i| (i + 1) % self.available_locales.len())
                .unwrap_or(0);
            self.current_locale = self.available_locales[next].clone();
        }
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_args(&self, key: &str, args: &FluentArgs) -> String {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
                tracing::warn!(key, ?errors, "Failed to format message");
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    requested: Option<&str>,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = requested
        .map(str::to_string)
        .into_iter()
        .chain(os_locale);

    for tag in candidates {
        let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
            continue;
        };
        if available.contains(&lang) {
            return Some(lang);
        }
        // fr-CA falls back to fr, en-GB to en-US
        if let Some(same_language) = available.iter().find(|l| l.language == lang.language) {
            return Some(same_language.clone());
        }
    }

    None
}

/// Static strings resolved for one locale
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Labels {
    pub locale: String,
    pub language_name: String,
    pub app_title: String,
    pub loading: String,
    pub server_error_title: String,
    pub column_name: String,
    pub column_email: String,
    pub column_actions: String,
    pub edit_trigger: String,
    pub fields: Vec<String>,
    pub field_required: String,
    pub form_hint: String,
    pub status_list: String,
    pub status_modal: String,
    pub help_title: String,
    pub help_lines: Vec<String>,
    pub help_close: String,
}

impl Labels {
    pub fn from_i18n(i18n: &I18n) -> Self {
        Labels {
            locale: i18n.current_locale().to_string(),
            language_name: i18n.tr("language-name"),
            app_title: i18n.tr("app-title"),
            loading: i18n.tr("loading"),
            server_error_title: i18n.tr("server-error-title"),
            column_name: i18n.tr("column-name"),
            column_email: i18n.tr("column-email"),
            column_actions: i18n.tr("column-actions"),
            edit_trigger: i18n.tr("edit-trigger"),
            fields: FormField::ALL
                .iter()
                .map(|f| i18n.tr(&format!("field-{}", f.key())))
                .collect(),
            field_required: i18n.tr("field-required"),
            form_hint: i18n.tr("form-hint"),
            status_list: i18n.tr("status-list"),
            status_modal: i18n.tr("status-modal"),
            help_title: i18n.tr("help-title"),
            help_lines: [
                "help-navigate",
                "help-edit",
                "help-fields",
                "help-channel",
                "help-submit",
                "help-cancel",
                "help-language",
                "help-quit",
            ]
            .iter()
            .map(|key| i18n.tr(key))
            .collect(),
            help_close: i18n.tr("help-close"),
        }
    }

    /// Label of a form field
    pub fn field(&self, field: FormField) -> &str {
        self.fields
            .get(field as usize)
            .map(String::as_str)
            .unwrap_or(field.key())
    }
}

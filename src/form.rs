//! Edit form data and required-field validation

use serde::Serialize;

use crate::models::{Channel, Customer};

/// Editable fields, in form order
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Name,
    Email,
    Channel,
    Address,
    Postal,
    City,
    Province,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Email,
        FormField::Channel,
        FormField::Address,
        FormField::Postal,
        FormField::City,
        FormField::Province,
    ];

    /// Lowercase field id, also the suffix of its label key
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Channel => "channel",
            FormField::Address => "address",
            FormField::Postal => "postal",
            FormField::City => "city",
            FormField::Province => "province",
        }
    }

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Channel,
            FormField::Channel => FormField::Address,
            FormField::Address => FormField::Postal,
            FormField::Postal => FormField::City,
            FormField::City => FormField::Province,
            FormField::Province => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Province,
            FormField::Email => FormField::Name,
            FormField::Channel => FormField::Email,
            FormField::Address => FormField::Channel,
            FormField::Postal => FormField::Address,
            FormField::City => FormField::Postal,
            FormField::Province => FormField::City,
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Channel)
    }
}

/// Values staged in the edit modal
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormInputs {
    pub name: String,
    pub email: String,
    pub channel: Option<Channel>,
    pub address: String,
    pub postal: String,
    pub city: String,
    pub province: String,
}

impl FormInputs {
    pub fn from_customer(customer: &Customer) -> Self {
        FormInputs {
            name: customer.name.clone(),
            email: customer.email.clone(),
            channel: Some(customer.channel),
            address: customer.address.clone(),
            postal: customer.postal.clone(),
            city: customer.city.clone(),
            province: customer.province.clone(),
        }
    }

    /// Text content of a field; the channel renders as its wire name
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Channel => self.channel.map(|c| c.as_str()).unwrap_or(""),
            FormField::Address => &self.address,
            FormField::Postal => &self.postal,
            FormField::City => &self.city,
            FormField::Province => &self.province,
        }
    }

    /// Mutable text of a text field. `None` for the channel select.
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Channel => None,
            FormField::Address => Some(&mut self.address),
            FormField::Postal => Some(&mut self.postal),
            FormField::City => Some(&mut self.city),
            FormField::Province => Some(&mut self.province),
        }
    }

    fn is_present(&self, field: FormField) -> bool {
        match field {
            FormField::Channel => self.channel.is_some(),
            _ => !self.value(field).trim().is_empty(),
        }
    }

    /// Presence check over every field
    pub fn validate(&self) -> Result<(), FormErrors> {
        let missing: Vec<FormField> = FormField::ALL
            .into_iter()
            .filter(|f| !self.is_present(*f))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormErrors { fields: missing })
        }
    }
}

/// Fields that failed validation, in form order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    fields: Vec<FormField>,
}

impl FormErrors {
    pub fn contains(&self, field: FormField) -> bool {
        self.fields.contains(&field)
    }

    pub fn first(&self) -> Option<FormField> {
        self.fields.first().copied()
    }

    pub fn clear(&mut self, field: FormField) {
        self.fields.retain(|f| *f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

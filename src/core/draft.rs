//! # Form Draft
//!
//! Unsaved field values for the create/edit form, plus the inline validation
//! message for each field. A draft only exists while the form is open.
//!
//! Validation runs per field when the field loses focus (`blur`). Errors are
//! informational: the only thing that blocks submission is an empty field.

use std::collections::BTreeMap;

use phonenumber::country;
use validator::{ValidateEmail, ValidateUrl};

use crate::core::customer::{Customer, CustomerFields, Gender};

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_NAME_TOO_LONG: &str = "Name must be at most 50 characters";
pub const MSG_INVALID_AVATAR: &str = "Avatar must be a valid URL";
pub const MSG_INVALID_EMAIL: &str = "Email is invalid (example@gmail.com)";
pub const MSG_INVALID_PHONE: &str = "Phone number is invalid";

const MAX_NAME_CHARS: usize = 50;

/// Editable text fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Avatar,
    Email,
    Phone,
    Description,
    Address,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Avatar,
        Field::Email,
        Field::Phone,
        Field::Description,
        Field::Address,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Avatar => "Avatar",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::Description => "Job",
            Field::Address => "Address",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Avatar => "Enter avatar URL",
            Field::Email => "example@gmail.com",
            Field::Phone => "Vietnamese phone number",
            _ => "",
        }
    }
}

/// Check one field value, returning the message to show inline.
pub fn validate(field: Field, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some(MSG_REQUIRED);
    }
    match field {
        Field::Name if value.chars().count() > MAX_NAME_CHARS => Some(MSG_NAME_TOO_LONG),
        Field::Avatar if !value.validate_url() => Some(MSG_INVALID_AVATAR),
        Field::Email if !value.to_string().validate_email() => Some(MSG_INVALID_EMAIL),
        Field::Phone if !is_valid_phone(value) => Some(MSG_INVALID_PHONE),
        _ => None,
    }
}

/// National numbers are read as Vietnamese; `+`-prefixed numbers as international.
fn is_valid_phone(value: &str) -> bool {
    phonenumber::parse(Some(country::Id::VN), value)
        .map(|number| phonenumber::is_valid(&number))
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormDraft {
    fields: CustomerFields,
    errors: BTreeMap<Field, &'static str>,
}

impl FormDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pre-fill from an existing record (edit mode).
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            fields: customer.fields.clone(),
            errors: BTreeMap::new(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Avatar => &self.fields.avatar,
            Field::Email => &self.fields.email,
            Field::Phone => &self.fields.phone_number,
            Field::Description => &self.fields.description,
            Field::Address => &self.fields.address,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Avatar => &mut self.fields.avatar,
            Field::Email => &mut self.fields.email,
            Field::Phone => &mut self.fields.phone_number,
            Field::Description => &mut self.fields.description,
            Field::Address => &mut self.fields.address,
        };
        *slot = value;
    }

    pub fn gender(&self) -> Gender {
        self.fields.gender
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.fields.gender = gender;
    }

    /// Field lost focus: recompute its inline error.
    pub fn blur(&mut self, field: Field) {
        match validate(field, self.value(field)) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when no text field is empty.
    pub fn is_submittable(&self) -> bool {
        Field::ALL
            .iter()
            .all(|&field| !self.value(field).trim().is_empty())
    }

    /// Request payload with surrounding whitespace stripped.
    pub fn to_fields(&self) -> CustomerFields {
        CustomerFields {
            name: self.fields.name.trim().to_string(),
            avatar: self.fields.avatar.trim().to_string(),
            email: self.fields.email.trim().to_string(),
            phone_number: self.fields.phone_number.trim().to_string(),
            description: self.fields.description.trim().to_string(),
            address: self.fields.address.trim().to_string(),
            gender: self.fields.gender,
        }
    }
}

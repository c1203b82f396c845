use std::fmt;

use serde::Serialize;

use crate::{Bedrooms, ExtensionSelection, PropertyType, ServiceSet, Timeline};

/// A free-text answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FirstName,
    LastName,
    Address,
    Postcode,
    Email,
    Phone,
    /// "How did you hear about us?"
    Source,
}

impl TextField {
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Address,
        Self::Postcode,
        Self::Email,
        Self::Phone,
        Self::Source,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Address => "Project address",
            Self::Postcode => "Project postcode",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::Source => "How did you hear about us?",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Source)
    }
}

/// A yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckboxField {
    AcceptTerms,
    Newsletter,
}

impl CheckboxField {
    pub const ALL: [Self; 2] = [Self::AcceptTerms, Self::Newsletter];

    pub fn label(self) -> &'static str {
        match self {
            Self::AcceptTerms => "I accept the terms and conditions",
            Self::Newsletter => "I would like to receive updates and promotions",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::AcceptTerms)
    }
}

/// A required constraint that is not met yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// Must not be empty.
    Text(TextField),
    /// Must be checked.
    Checkbox(CheckboxField),
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(field) => f.write_str(field.label()),
            Self::Checkbox(field) => f.write_str(field.label()),
        }
    }
}

/// Every answer of one enquiry.
///
/// Created empty when the form is mounted and mutated in place by the user's
/// interactions. Serializes to the flat camelCase shape handed to submitters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    pub property_type: Option<PropertyType>,
    #[serde(flatten)]
    pub extension: ExtensionSelection,
    pub bedrooms: Option<Bedrooms>,
    pub timeline: Option<Timeline>,
    pub services: ServiceSet,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub postcode: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    pub accept_terms: bool,
    pub newsletter: bool,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Address => &self.address,
            TextField::Postcode => &self.postcode,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Source => &self.source,
        }
    }

    /// Store a text answer verbatim.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::Address => &mut self.address,
            TextField::Postcode => &mut self.postcode,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Source => &mut self.source,
        };
        *slot = value.into();
    }

    pub fn checkbox(&self, field: CheckboxField) -> bool {
        match field {
            CheckboxField::AcceptTerms => self.accept_terms,
            CheckboxField::Newsletter => self.newsletter,
        }
    }

    pub fn set_checkbox(&mut self, field: CheckboxField, checked: bool) {
        match field {
            CheckboxField::AcceptTerms => self.accept_terms = checked,
            CheckboxField::Newsletter => self.newsletter = checked,
        }
    }

    /// Unmet required constraints, in form order.
    pub fn missing_required(&self) -> Vec<RequiredField> {
        let text = TextField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.text(*field).is_empty())
            .map(RequiredField::Text);
        let checkboxes = CheckboxField::ALL
            .into_iter()
            .filter(|field| field.is_required() && !self.checkbox(*field))
            .map(RequiredField::Checkbox);
        text.chain(checkboxes).collect()
    }
}

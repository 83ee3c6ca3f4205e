use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// Locally held, uncommitted contact form input.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// One input of the contact form. Displays as the HTML `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];
}

impl ContactDraft {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First field left empty, in form order.
    #[must_use]
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL.into_iter().find(|field| self.get(*field).is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.into_iter().all(|field| self.get(field).is_empty())
    }
}

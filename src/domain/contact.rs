use super::*;
use serde::Serialize;

// Capacities of the legacy fixed-size buffers, minus the terminator
pub const NAME_CAPACITY: usize = 49;
pub const PHONE_CAPACITY: usize = 14;
pub const EMAIL_CAPACITY: usize = 99;

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

impl Contact {
    /// Builds a validated contact.
    ///
    /// Fields are truncated to the legacy buffer capacities so records stay
    /// readable by files written with the old fixed-width layout.
    pub fn new(name: &str, phone: &str, email: Option<&str>) -> Result<Self, AppError> {
        if name.is_empty() || phone.is_empty() {
            return Err(AppError::InvalidInput(ValidationReq::name_req()));
        }

        if !is_valid_phone(phone) {
            return Err(AppError::InvalidPhone(ValidationReq::phone_req()));
        }

        let email = email.unwrap_or_default();
        if !email.is_empty() && !is_valid_email(email) {
            return Err(AppError::InvalidEmail(ValidationReq::email_req()));
        }

        Ok(Contact {
            name: truncate_to(name, NAME_CAPACITY).to_string(),
            phone: truncate_to(phone, PHONE_CAPACITY).to_string(),
            email: truncate_to(email, EMAIL_CAPACITY).to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// `None` when the contact was stored without an email.
    pub fn email(&self) -> Option<&str> {
        if self.email.is_empty() {
            None
        } else {
            Some(&self.email)
        }
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Cuts `s` to at most `max` bytes, backing off to a char boundary.
pub fn truncate_to(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }

    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

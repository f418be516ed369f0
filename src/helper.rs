use std::io::BufRead;

use serde::Deserialize;
use tracing::debug;

use crate::domain::Contact;
use crate::errors::AppError;

pub const FIELD_SEPARATOR: char = '|';

// Fields are written as-is. A '|' inside a field will corrupt the line.
pub fn serialize_contacts(contacts: &[Contact]) -> String {
    let mut data = String::new();

    for contact in contacts {
        let ser_contact = format!(
            "{}{sep}{}{sep}{}\n",
            contact.name(),
            contact.phone(),
            contact.email().unwrap_or_default(),
            sep = FIELD_SEPARATOR
        );

        data.push_str(&ser_contact);
    }
    data
}

/// Reads `name|phone|email` lines, skipping any line that is malformed,
/// not valid UTF-8, or that no longer passes validation.
pub fn deserialize_contacts_from_txt_buffer<R: BufRead>(
    buffer: R,
) -> Result<Vec<Contact>, AppError> {
    let mut contacts = Vec::new();

    // Split on raw bytes: legacy files may hold Latin-1 names
    for (line_no, line) in buffer.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        let line = match String::from_utf8(line) {
            Ok(line) => line,
            Err(e) => {
                debug!(line = line_no + 1, error = %e, "skipping line that is not UTF-8");
                continue;
            }
        };

        // Empty tokens are dropped, so "a||b" reads as name "a", phone "b"
        let mut fields = line.split(FIELD_SEPARATOR).filter(|f| !f.is_empty());

        let (Some(name), Some(phone)) = (fields.next(), fields.next()) else {
            debug!(line = line_no + 1, "skipping line without name and phone");
            continue;
        };
        let email = fields.next();

        match Contact::new(name, phone, email) {
            Ok(contact) => contacts.push(contact),
            Err(e) => {
                debug!(line = line_no + 1, error = %e, "skipping invalid contact");
            }
        }
    }

    Ok(contacts)
}

/// One entry of a JSON export, as written by `list --json`.
#[derive(Debug, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Parses a JSON array of contact records. Anything but an array is an error.
pub fn deserialize_contacts_from_json(data: &str) -> Result<Vec<ContactRecord>, AppError> {
    Ok(serde_json::from_str(data)?)
}

pub mod command;
pub mod menu;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;

pub fn display_contact(contact: &Contact) -> String {
    let mut output = format!("Name: {}\nPhone: {}", contact.name(), contact.phone());
    if let Some(email) = contact.email() {
        output.push_str(&format!("\nEmail: {email}"));
    }
    output
}

pub fn listing_line(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:15} {}",
        contact.name(),
        contact.phone(),
        contact.email().unwrap_or_default()
    )
}

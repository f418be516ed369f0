use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::cli::{display_contact, listing_line};
use crate::domain::ContactManager;
use crate::errors::AppError;

pub enum Command {
    AddContact,
    SearchContact,
    DeleteContact,
    ListContacts,
    SaveContacts,
    Exit,
}

impl Command {
    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Command::AddContact),
            2 => Some(Command::SearchContact),
            3 => Some(Command::DeleteContact),
            4 => Some(Command::ListContacts),
            5 => Some(Command::SaveContacts),
            6 => Some(Command::Exit),
            _ => None,
        }
    }
}

pub fn show_menu() -> Result<(), AppError> {
    println!("\n=== Contact Management System ===");
    println!("1. Add Contact");
    println!("2. Search Contact");
    println!("3. Delete Contact");
    println!("4. Display All Contacts");
    println!("5. Save Contacts");
    println!("6. Exit");
    print!("Enter choice (1-6): ");
    io::stdout().flush()?;
    Ok(())
}

/// Prints `prompt` and reads one trimmed line. `None` once input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Interactive loop. Operation errors are printed and the loop goes on;
/// leaving (choice 6 or end of input) saves the contacts first.
pub fn run_menu<R: BufRead>(storage: &mut ContactManager, input: &mut R) -> Result<(), AppError> {
    println!("Contact Manager Started - Loaded {} contacts", storage.len());

    loop {
        show_menu()?;

        let Some(action) = get_input(input, "")? else {
            println!();
            break;
        };

        let choice = match action.parse::<i32>().map_err(AppError::from) {
            Ok(choice) => choice,
            Err(e) => {
                debug!(error = %e, "menu choice is not a number");
                println!("Error: Invalid input");
                continue;
            }
        };

        let Some(command) = Command::from_choice(choice) else {
            println!("Invalid choice! Please enter 1-6");
            continue;
        };

        match command {
            Command::AddContact => {
                let (Some(name), Some(phone), Some(email)) = (
                    get_input(input, "Enter name: ")?,
                    get_input(input, "Enter phone: ")?,
                    get_input(input, "Enter email (optional): ")?,
                ) else {
                    break;
                };

                let email = Some(email.as_str()).filter(|e| !e.is_empty());
                match storage.add_contact(&name, &phone, email) {
                    Ok(_) => println!("Contact added successfully"),
                    Err(e) => println!("Error: {e}"),
                }
            }
            Command::SearchContact => {
                let Some(name) = get_input(input, "Enter name to search: ")? else {
                    break;
                };

                match storage.search(&name) {
                    Some(contact) => println!("\nContact found:\n{}", display_contact(contact)),
                    None => println!("Contact not found"),
                }
            }
            Command::DeleteContact => {
                let Some(name) = get_input(input, "Enter name to delete: ")? else {
                    break;
                };

                match storage.delete_contact(&name) {
                    Ok(_) => println!("Contact deleted successfully"),
                    Err(e) => println!("Error: {e}"),
                }
            }
            Command::ListContacts => {
                if storage.is_empty() {
                    println!("No contacts to display");
                    continue;
                }

                println!("\n=== Contact List ===");
                for (i, contact) in storage.list().enumerate() {
                    println!("{}", listing_line(i + 1, contact));
                }
            }
            Command::SaveContacts => save_and_report(storage),
            Command::Exit => break,
        }
    }

    save_and_report(storage);
    println!("Goodbye!");
    Ok(())
}

fn save_and_report(storage: &ContactManager) {
    match storage.save() {
        Ok(()) => println!("Contacts saved successfully"),
        Err(e) => println!("Error: Cannot save contacts to file: {e}"),
    }
}

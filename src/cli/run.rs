use crate::{
    cli::{
        command::{Cli, Commands},
        display_contact, listing_line, menu,
    },
    helper,
    prelude::{AppError, Contact, ContactManager, TxtStorage},
};
use clap::Parser;
use std::{fs, io};
use tracing::{debug, warn};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    debug!(file = %cli.file.display(), "using contacts file");
    let mut storage = ContactManager::new(Box::new(TxtStorage::new(&cli.file)));

    // Loading is best effort, a broken file should not lock the user out.
    // Saving stays disabled so the file is left as it was.
    if let Err(e) = storage.load() {
        warn!(error = %e, "could not load contacts, starting empty without saving");
    }

    match cli.command {
        None => {
            let stdin = io::stdin();
            menu::run_menu(&mut storage, &mut stdin.lock())
        }

        Some(Commands::Add { name, phone, email }) => {
            storage.add_contact(&name, &phone, email.as_deref())?;
            storage.save()?;

            println!("Contact added successfully");
            Ok(())
        }

        Some(Commands::Search { name }) => {
            match storage.search(&name) {
                Some(contact) => println!("{}", display_contact(contact)),
                None => println!("Contact not found"),
            }
            Ok(())
        }

        Some(Commands::Find { query }) => {
            let found = storage.filter(&query);
            if found.is_empty() {
                println!("No contacts found");
                return Ok(());
            }

            for (i, c) in found.iter().enumerate() {
                println!("{}", listing_line(i + 1, c));
            }
            Ok(())
        }

        Some(Commands::Import { json }) => {
            let data = fs::read_to_string(&json)?;
            let records = helper::deserialize_contacts_from_json(&data)?;

            let (imported, skipped) = storage.import_records(records);
            storage.save()?;

            println!(
                "Successfully imported {} contacts from {:?} ({} skipped).",
                imported, json, skipped
            );
            Ok(())
        }

        // Lookup failures are reported, not fatal
        Some(Commands::Delete { name }) => match storage.delete_contact(&name) {
            Ok(_) => {
                storage.save()?;
                println!("Contact deleted successfully");
                Ok(())
            }
            Err(e @ (AppError::EmptyStore | AppError::NotFound(_))) => {
                eprintln!("{e}");
                Ok(())
            }
            Err(e) => Err(e),
        },

        Some(Commands::List { json }) => {
            if json {
                let contacts: Vec<&Contact> = storage.list().collect();
                println!("{}", serde_json::to_string_pretty(&contacts)?);
                return Ok(());
            }

            if storage.is_empty() {
                println!("No contacts to display");
                return Ok(());
            }

            for (i, c) in storage.list().enumerate() {
                println!("{}", listing_line(i + 1, c));
            }
            Ok(())
        }
    }
}

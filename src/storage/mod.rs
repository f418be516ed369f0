pub mod memory;
pub mod txt;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use txt::TxtStorage;

pub const DEFAULT_STORAGE_PATH: &str = "contacts.txt";

pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

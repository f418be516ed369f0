use super::*;
use crate::helper;

use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::PathBuf;

/// Pipe-delimited text file, one `name|phone|email` record per line.
pub struct TxtStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl TxtStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "txt".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStore for TxtStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        // A missing file is an empty contact list, not an error
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        helper::deserialize_contacts_from_txt_buffer(reader)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true) // WRITE to file on save
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = helper::serialize_contacts(contacts);
        file.write_all(data.as_bytes())?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

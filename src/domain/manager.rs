use super::*;
use crate::helper::ContactRecord;

use tracing::{debug, info};

/// The in-memory contact list plus the backend it is persisted to.
///
/// Records keep insertion order. Lookups are linear scans.
pub struct ContactManager {
    mem: Vec<Contact>,
    storage: Box<dyn ContactStore>,
    // Set when the backend could not be read; saving would wipe it
    load_failed: bool,
}

impl ContactManager {
    /// Starts with an empty list; call [`ContactManager::load`] to read the backend.
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
            load_failed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<(), AppError> {
        // Exact case on purpose: "alice" and "Alice" are different entries here
        let stored_name = contact::truncate_to(name, contact::NAME_CAPACITY);
        if self.mem.iter().any(|c| c.name() == stored_name) {
            return Err(AppError::DuplicateName(name.to_string()));
        }

        let new_contact = Contact::new(name, phone, email)?;
        debug!(name = new_contact.name(), "adding contact");

        self.mem.push(new_contact);
        Ok(())
    }

    pub fn search(&self, name: &str) -> Option<&Contact> {
        self.mem.iter().find(|c| c.name_matches(name))
    }

    /// Removes the first contact whose name matches, ignoring case.
    pub fn delete_contact(&mut self, name: &str) -> Result<Contact, AppError> {
        if self.mem.is_empty() {
            return Err(AppError::EmptyStore);
        }

        let index = self
            .mem
            .iter()
            .position(|c| c.name_matches(name))
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        let removed = self.mem.remove(index);
        debug!(name = removed.name(), "deleted contact");
        Ok(removed)
    }

    /// Contacts whose name, phone or email contains `query`, ignoring case.
    /// A blank query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&Contact> {
        let query = query.trim().to_lowercase();

        self.mem
            .iter()
            .filter(|c| {
                c.name().to_lowercase().contains(&query)
                    || c.phone().contains(&query)
                    || c
                        .email()
                        .is_some_and(|e| e.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Adds each record through [`ContactManager::add_contact`], so duplicates
    /// and invalid entries are skipped. Returns `(imported, skipped)`.
    pub fn import_records(&mut self, records: Vec<ContactRecord>) -> (usize, usize) {
        let mut imported = 0;
        let mut skipped = 0;

        for record in records {
            match self.add_contact(&record.name, &record.phone, record.email.as_deref()) {
                Ok(()) => imported += 1,
                Err(e) => {
                    debug!(name = %record.name, error = %e, "skipping imported record");
                    skipped += 1;
                }
            }
        }

        info!(imported, skipped, "imported contacts");
        (imported, skipped)
    }

    pub fn list(&self) -> ContactIter<'_> {
        ContactIter {
            inner: &self.mem,
            idx: 0,
        }
    }

    /// Appends every record the backend yields, in backend order.
    ///
    /// Duplicate names already present in the backend are kept.
    ///
    /// If the backend cannot be read, later saves are refused so the
    /// unreadable data is not overwritten.
    pub fn load(&mut self) -> Result<usize, AppError> {
        let contacts = match self.storage.load() {
            Ok(contacts) => contacts,
            Err(e) => {
                self.load_failed = true;
                return Err(e);
            }
        };
        let total = contacts.len();
        self.mem.extend(contacts);

        info!(
            total,
            medium = self.storage.get_medium(),
            "loaded contacts"
        );
        Ok(total)
    }

    pub fn save(&self) -> Result<(), AppError> {
        if self.load_failed {
            return Err(AppError::UnsafeSave(self.storage.get_medium().to_string()));
        }

        self.storage.save(&self.mem)?;
        info!(
            total = self.mem.len(),
            medium = self.storage.get_medium(),
            "saved contacts"
        );
        Ok(())
    }
}

#[derive(Clone)]
pub struct ContactIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for ContactIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx];
        self.idx += 1;
        Some(contact)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.inner.len() - self.idx;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ContactIter<'_> {}

//! A small personal contact book.
//!
//! Contacts live in an ordered in-memory list ([`ContactManager`]) and are
//! persisted as `name|phone|email` lines through a [`ContactStore`] backend.
//!
//! ```
//! use contact_book::prelude::*;
//!
//! let mut book = ContactManager::new(Box::new(MemStorage::default()));
//! book.add_contact("Alice", "555-123-4567", None)?;
//! assert_eq!(book.search("alice").map(|c| c.phone()), Some("555-123-4567"));
//! # Ok::<(), AppError>(())
//! ```
//!
//! [`ContactManager`]: domain::ContactManager
//! [`ContactStore`]: storage::ContactStore

pub mod cli;
pub mod domain;
pub mod errors;
pub mod helper;
pub mod prelude;
pub mod storage;
pub mod validation;

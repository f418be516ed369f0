pub mod contact;
pub mod manager;

use crate::errors::AppError;
use crate::storage::ContactStore;
use crate::validation::{ValidationReq, is_valid_email, is_valid_phone};

pub use contact::Contact;
pub use manager::{ContactIter, ContactManager};

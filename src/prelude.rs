pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact},
    manager::{ContactIter, ContactManager},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, TxtStorage, memory::MemStorage};

use super::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Keeps "saved" contacts in memory. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemStorage {
    data: Rc<RefCell<Vec<Contact>>>,
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}

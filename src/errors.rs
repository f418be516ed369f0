use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid phone number format: {0}")]
    InvalidPhone(String),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Contact with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Contact '{0}' not found")]
    NotFound(String),

    #[error("Contact list is empty")]
    EmptyStore,

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not saving to '{0}' storage: it could not be loaded and would be overwritten")]
    UnsafeSave(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_parse_int_error_message() {
        let wrong_string = "abc".parse::<i32>().unwrap_err();
        let err = AppError::from(wrong_string);

        assert!(format!("{}", err).contains("Invalid number format: "));
    }

    #[test]
    fn confirm_lookup_error_messages() {
        assert_eq!(
            AppError::NotFound("Alice".to_string()).to_string(),
            "Contact 'Alice' not found"
        );
        assert_eq!(AppError::EmptyStore.to_string(), "Contact list is empty");
        assert_eq!(
            AppError::DuplicateName("Bob".to_string()).to_string(),
            "Contact with name 'Bob' already exists"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();

        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}

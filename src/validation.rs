pub struct ValidationReq;

impl ValidationReq {
    pub fn name_req() -> String {
        "Name and phone number are required".to_string()
    }

    pub fn phone_req() -> String {
        "Number must contain at least 10 characters, made of digits, '-', spaces and parentheses"
            .to_string()
    }

    pub fn email_req() -> String {
        "Email can be empty, or must contain '@' and '.'".to_string()
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    // At least 10 bytes long
    // Only digits, '-', ' ', '(' and ')'
    phone.len() >= 10
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | ' ' | '(' | ')'))
}

pub fn is_valid_email(email: &str) -> bool {
    // No position rules, both chars just have to be somewhere
    email.contains('@') && email.contains('.')
}

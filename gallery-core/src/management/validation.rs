//! Field rules for management forms. Every rule runs; the messages are
//! returned together.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{CatalogueError, Result};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex should compile")
});

/// Omani numbers: `+968` then eight digits, optionally split 4/4 by spaces.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+968\s?\d{4}\s?\d{4}$").expect("phone regex should compile")
});

pub const MAX_PRICE: Decimal = Decimal::from_parts(999_999, 0, 0, false, 0);

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone.trim())
}

/// Collected rule failures for one form.
#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.0.push(message.into());
        }
        self
    }

    /// Required text whose trimmed length must fall in `min..=max` characters.
    pub fn length(&mut self, field: &str, value: &str, min: usize, max: usize) -> &mut Self {
        let len = value.trim().chars().count();
        if len == 0 && min > 0 {
            self.0.push(format!("{field} is required"));
        } else if len < min || len > max {
            self.0
                .push(format!("{field} must be between {min} and {max} characters"));
        }
        self
    }

    pub fn max_length(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.trim().chars().count() > max {
            self.0
                .push(format!("{field} cannot exceed {max} characters"));
        }
        self
    }

    pub fn email(&mut self, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.0.push("Email is required".to_string());
        } else if !is_valid_email(value) {
            self.0.push("Invalid email address".to_string());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_result(self) -> Result<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CatalogueError::InvalidInput(self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_numbers_follow_the_local_format() {
        assert!(is_valid_phone("+968 9123 4567"));
        assert!(is_valid_phone("+96891234567"));
        assert!(is_valid_phone("+968 91234567"));
        assert!(!is_valid_phone("91234567"));
        assert!(!is_valid_phone("+968 9123 456"));
        assert!(!is_valid_phone("+971 9123 4567"));
    }

    #[test]
    fn emails_need_a_domain() {
        assert!(is_valid_email("layla@gallery.om"));
        assert!(!is_valid_email("layla@gallery"));
        assert!(!is_valid_email("layla gallery.om"));
    }

    #[test]
    fn collects_every_failure() {
        let mut violations = Violations::new();
        violations
            .length("Name", "A", 2, 100)
            .email("nope")
            .max_length("Bio", &"x".repeat(501), 500);

        assert_eq!(violations.messages().len(), 3);
        let err = violations.into_result().unwrap_err();
        assert_eq!(err.client_messages().len(), 3);
    }

    #[test]
    fn blank_required_fields_say_so() {
        let mut violations = Violations::new();
        violations.length("Title", "   ", 3, 150);
        assert_eq!(violations.messages(), ["Title is required"]);
    }

    #[test]
    fn price_ceiling() {
        assert_eq!(MAX_PRICE, Decimal::from(999_999));
    }
}

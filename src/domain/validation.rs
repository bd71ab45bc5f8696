//! Field-level checks shared by the domain models.
//!
//! Lengths are counted in characters, not bytes.

use email_address::EmailAddress;

use super::errors::{DomainError, DomainResult};

pub fn check_length(field: &str, value: &str, min: usize, max: Option<usize>) -> DomainResult<()> {
    let len = value.chars().count();
    if len < min {
        return Err(DomainError::validation(
            field,
            format!("must be at least {min} characters long"),
        ));
    }
    if let Some(max) = max {
        if len > max {
            return Err(DomainError::validation(
                field,
                format!("must be at most {max} characters long"),
            ));
        }
    }
    Ok(())
}

pub fn check_email(field: &str, value: &str) -> DomainResult<()> {
    if EmailAddress::is_valid(value) {
        Ok(())
    } else {
        Err(DomainError::validation(field, "is not a valid email address"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(check_length("content", "hello", 5, Some(255)).is_ok());
        assert!(check_length("content", "hell", 5, Some(255)).is_err());
        assert!(check_length("content", &"x".repeat(255), 5, Some(255)).is_ok());
        assert!(check_length("content", &"x".repeat(256), 5, Some(255)).is_err());
    }

    #[test]
    fn length_counts_characters() {
        assert!(check_length("first_name", "ñ", 1, Some(1)).is_ok());
    }

    #[test]
    fn email_shape() {
        for good in ["jane@example.com", "root@localhost", "first.last+tag@sub.example.org"] {
            assert!(check_email("email", good).is_ok(), "{good} should be accepted");
        }
        for bad in ["", "jane", "@example.com", "jane@", "ja ne@example.com", "a@b@c.com"] {
            assert!(check_email("email", bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = check_length("password", "ab", 3, None).unwrap_err();
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "password"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

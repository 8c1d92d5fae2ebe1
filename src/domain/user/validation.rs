//! Registration input rules

use thiserror::Error;

/// Errors that can occur while validating registration input
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username is too short. Minimum length is {0} characters")]
    UsernameTooShort(usize),

    #[error("Username exceeds maximum length of {0} characters")]
    UsernameTooLong(usize),

    #[error("Username contains invalid character: '{0}'. Only alphanumeric characters, '.', '_' and '-' are allowed")]
    InvalidUsernameCharacter(char),

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),
}

const MIN_USERNAME_LENGTH: usize = 3;
const MAX_USERNAME_LENGTH: usize = 50;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate a username for registration
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    let length = username.chars().count();

    if length < MIN_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooShort(MIN_USERNAME_LENGTH));
    }

    if length > MAX_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    match username
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        Some(c) => Err(UserValidationError::InvalidUsernameCharacter(c)),
        None => Ok(()),
    }
}

/// Validate a password for registration
///
/// Length is counted in characters, not bytes.
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("john.doe").is_ok());
        assert!(validate_username("user_name-2").is_ok());
    }

    #[test]
    fn test_username_length_bounds() {
        assert_eq!(
            validate_username("ab"),
            Err(UserValidationError::UsernameTooShort(3))
        );
        assert_eq!(
            validate_username(&"a".repeat(51)),
            Err(UserValidationError::UsernameTooLong(50))
        );
    }

    #[test]
    fn test_username_invalid_character() {
        assert_eq!(
            validate_username("alice@example"),
            Err(UserValidationError::InvalidUsernameCharacter('@'))
        );
        assert_eq!(
            validate_username("al ice"),
            Err(UserValidationError::InvalidUsernameCharacter(' '))
        );
    }

    #[test]
    fn test_password_bounds() {
        assert!(validate_password("secret123").is_ok());
        assert_eq!(
            validate_password("short"),
            Err(UserValidationError::PasswordTooShort(8))
        );
        assert_eq!(
            validate_password(&"a".repeat(129)),
            Err(UserValidationError::PasswordTooLong(128))
        );
    }

    #[test]
    fn test_password_counts_characters() {
        // 8 characters, 16 bytes
        assert!(validate_password("ппппапап").is_ok());
    }
}

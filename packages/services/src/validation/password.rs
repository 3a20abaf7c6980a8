use std::fmt;

const MIN_PASSWORD_CHARS: usize = 12;

// Could be swapped for a real breached-password list
// Entries must themselves pass every other check, or they are never reached
const COMMON_PASSWORDS: [&str; 4] = [
    "Password123!",
    "Password1234!",
    "Qwerty123456!",
    "Welcome12345!",
];

/// Ways a password can fall short of the strength policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordWeakness {
    /// Password is too short
    TooShort,
    /// Password is missing an uppercase letter
    MissingUppercase,
    /// Password is missing a lowercase letter
    MissingLowercase,
    /// Password is missing a digit
    MissingDigit,
    /// Password is missing a special character
    MissingSpecialChar,
    /// Password is a commonly used password
    CommonPassword,
}

impl PasswordWeakness {
    /// Message for a field shown to the user as `name`
    pub fn describe(&self, name: &str) -> String {
        match self {
            PasswordWeakness::TooShort => {
                format!("{name} must be at least {MIN_PASSWORD_CHARS} characters long")
            }
            PasswordWeakness::MissingUppercase => {
                format!("{name} must contain at least one uppercase letter")
            }
            PasswordWeakness::MissingLowercase => {
                format!("{name} must contain at least one lowercase letter")
            }
            PasswordWeakness::MissingDigit => format!("{name} must contain at least one digit"),
            PasswordWeakness::MissingSpecialChar => {
                format!("{name} must contain at least one special character")
            }
            PasswordWeakness::CommonPassword => {
                format!("{name} is too common and easily guessable")
            }
        }
    }
}

impl fmt::Display for PasswordWeakness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("Password"))
    }
}

/// Checks a password against the strength policy, reporting the first
/// requirement it misses.
pub fn check_password_strength(password: &str) -> Result<(), PasswordWeakness> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(PasswordWeakness::TooShort);
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(PasswordWeakness::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(PasswordWeakness::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_numeric()) {
        return Err(PasswordWeakness::MissingDigit);
    }

    if password.chars().all(|c| c.is_alphanumeric()) {
        return Err(PasswordWeakness::MissingSpecialChar);
    }

    if COMMON_PASSWORDS.contains(&password) {
        return Err(PasswordWeakness::CommonPassword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length() {
        assert!(matches!(
            check_password_strength("Short1!"),
            Err(PasswordWeakness::TooShort)
        ));
        assert!(check_password_strength("LongEnough123!").is_ok());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 11 characters, more than 12 bytes
        assert!(matches!(
            check_password_strength("Ünïcödé1!aA"),
            Err(PasswordWeakness::TooShort)
        ));
    }

    #[test]
    fn test_password_uppercase() {
        assert!(matches!(
            check_password_strength("longpassword123!"),
            Err(PasswordWeakness::MissingUppercase)
        ));
        assert!(check_password_strength("LongPassword123!").is_ok());
    }

    #[test]
    fn test_password_lowercase() {
        assert!(matches!(
            check_password_strength("PASSWORD12345!"),
            Err(PasswordWeakness::MissingLowercase)
        ));
    }

    #[test]
    fn test_password_digits() {
        assert!(matches!(
            check_password_strength("PasswordNoDigit!"),
            Err(PasswordWeakness::MissingDigit)
        ));
    }

    #[test]
    fn test_password_special_chars() {
        assert!(matches!(
            check_password_strength("PasswordWithoutSpecialChars123456"),
            Err(PasswordWeakness::MissingSpecialChar)
        ));
        assert!(check_password_strength("MyUniqueP@ssw0rd").is_ok());
    }

    #[test]
    fn test_common_password() {
        assert!(matches!(
            check_password_strength("Password123!"),
            Err(PasswordWeakness::CommonPassword)
        ));
    }

    #[test]
    fn test_every_common_password_is_rejected_as_common() {
        for password in COMMON_PASSWORDS {
            assert_eq!(
                check_password_strength(password),
                Err(PasswordWeakness::CommonPassword),
                "{password}"
            );
        }
    }

    #[test]
    fn test_describe_uses_field_name() {
        assert_eq!(
            PasswordWeakness::MissingDigit.describe("New_password"),
            "New_password must contain at least one digit"
        );
        assert_eq!(
            PasswordWeakness::TooShort.to_string(),
            "Password must be at least 12 characters long"
        );
    }
}

use email_address::EmailAddress;

use super::entities::Role;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Name must be between 2 and 50 characters")]
    InvalidName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Trimmed, lowercased and syntactically valid.
pub fn normalize_email(raw: &str) -> Result<String, CredentialError> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(CredentialError::EmptyEmail);
    }

    if !EmailAddress::is_valid(email) {
        return Err(CredentialError::InvalidEmailFormat);
    }

    Ok(email.to_lowercase())
}

pub fn validate_name(raw: &str) -> Result<String, CredentialError> {
    let name = raw.trim();
    let len = name.chars().count();

    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(CredentialError::InvalidName);
    }

    Ok(name.to_string())
}

pub fn validate_password(raw: &str) -> Result<(), CredentialError> {
    if raw.chars().count() < PASSWORD_MIN_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    Ok(())
}

/// Validated input for creating an account, shared by self-registration and
/// admin-created users.
#[derive(Debug, Clone)]
pub struct NewAccount {
    name: String,
    email: String,
    password: String,
    role: Role,
}

impl NewAccount {
    pub fn new(
        name: &str,
        email: &str,
        password: String,
        role: Role,
    ) -> Result<Self, CredentialError> {
        let name = validate_name(name)?;
        let email = normalize_email(email)?;
        validate_password(&password)?;

        Ok(Self {
            name,
            email,
            password,
            role,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

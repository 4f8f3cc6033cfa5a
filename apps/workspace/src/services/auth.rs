use thiserror::Error;

use crate::models::UserProfile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email tidak terdaftar di Amboja Workspace")]
    UnknownEmail,
    #[error("Kata sandi salah, coba lagi")]
    WrongPassword,
    #[error("Email dan kata sandi wajib diisi")]
    EmptyCredentials,
}

struct MockAccount {
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: &'static str,
}

// Demo accounts; this is a training mock, not real authentication.
const ACCOUNTS: [MockAccount; 2] = [
    MockAccount {
        email: "budi@amboja.id",
        password: "amboja123",
        name: "Budi Santoso",
        role: "Karyawan Baru",
    },
    MockAccount {
        email: "sari@amboja.id",
        password: "amboja123",
        name: "Sari Wijaya",
        role: "Analis Operasional",
    },
];

pub fn authenticate(email: &str, password: &str) -> Result<UserProfile, AuthError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::EmptyCredentials);
    }

    let account = ACCOUNTS
        .iter()
        .find(|account| account.email == email)
        .ok_or(AuthError::UnknownEmail)?;

    if account.password != password {
        return Err(AuthError::WrongPassword);
    }

    Ok(UserProfile {
        name: account.name.to_string(),
        email: account.email.to_string(),
        role: account.role.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_account_logs_in() {
        let profile = authenticate("budi@amboja.id", "amboja123").expect("login");
        assert_eq!(profile.name, "Budi Santoso");
    }

    #[test]
    fn email_is_case_insensitive() {
        assert!(authenticate("Budi@Amboja.id", "amboja123").is_ok());
    }

    #[test]
    fn failures_map_to_distinct_errors() {
        assert_eq!(
            authenticate("nobody@amboja.id", "amboja123"),
            Err(AuthError::UnknownEmail)
        );
        assert_eq!(
            authenticate("budi@amboja.id", "salah"),
            Err(AuthError::WrongPassword)
        );
        assert_eq!(authenticate("", ""), Err(AuthError::EmptyCredentials));
    }
}

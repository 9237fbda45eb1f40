use std::sync::Arc;

use thiserror::Error;

pub const DEFAULT_PASSWORD: &str = "1234";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Wrong password")]
    WrongPassword,
}

/// Members-only gate in front of the advisor. A shared password compared as
/// is, there are no accounts.
#[derive(Debug, Clone)]
pub struct Gate {
    password: Arc<str>,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD)
    }
}

impl Gate {
    pub fn new<S: Into<Arc<str>>>(password: S) -> Self {
        Self {
            password: password.into(),
        }
    }

    pub fn verify(&self, attempt: &str) -> Result<(), self::Error> {
        if attempt == self.password.as_ref() {
            Ok(())
        } else {
            Err(Error::WrongPassword)
        }
    }
}

#[test]
fn default_password_opens() {
    assert!(Gate::default().verify("1234").is_ok());
}

#[test]
fn wrong_password_is_rejected() {
    let gate = Gate::new("lantern");
    assert_eq!(gate.verify("1234"), Err(Error::WrongPassword));
    assert_eq!(gate.verify(""), Err(Error::WrongPassword));
    assert!(gate.verify("lantern").is_ok());
}

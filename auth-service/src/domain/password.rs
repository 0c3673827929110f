use std::fmt;

#[derive(PartialEq, Eq, Clone)]
pub struct Password(String);

impl Password {
    pub fn parse(password: String) -> Result<Password, String> {
        match password.is_empty() {
            false => Ok(Password(password)),
            true => Err("Password must not be empty".to_string()),
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([redacted])")
    }
}

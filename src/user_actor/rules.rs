use serde::Deserialize;

/// Longest username the store accepts unless configured otherwise.
pub const DEFAULT_MAX_USERNAME_LEN: usize = 50;

/// Constraints the store checks before persisting a user.
///
/// Injected into the User actor as its `Context`, so every create and update sees the same
/// rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserRules {
    /// Maximum username length in characters. Usernames must also be non-empty.
    pub max_username_len: usize,
}

impl Default for UserRules {
    fn default() -> Self {
        Self {
            max_username_len: DEFAULT_MAX_USERNAME_LEN,
        }
    }
}

impl UserRules {
    /// Checks a username against the length bounds, returning a message on failure.
    pub fn check_username(&self, username: &str) -> Result<(), String> {
        let len = username.chars().count();
        if len == 0 {
            return Err("username must not be empty".to_string());
        }
        if len > self.max_username_len {
            return Err(format!(
                "username is {len} characters, the limit is {}",
                self.max_username_len
            ));
        }
        Ok(())
    }
}

//! Admin area password check.
//!
//! A single shared secret compared verbatim. When no secret is configured the
//! well-known default [`DEFAULT_ADMIN_PASSWORD`] applies, which is only fit
//! for local use.

use log::warn;

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Clone)]
pub struct AdminAuth {
    secret: String,
    uses_default: bool,
}

impl AdminAuth {
    /// Uses `configured` unless it is missing or empty.
    pub fn new(configured: Option<String>) -> Self {
        match configured.filter(|secret| !secret.is_empty()) {
            Some(secret) => Self {
                secret,
                uses_default: false,
            },
            None => {
                warn!("ADMIN_PASSWORD is not set, the admin area accepts the default password");
                Self {
                    secret: DEFAULT_ADMIN_PASSWORD.to_string(),
                    uses_default: true,
                }
            }
        }
    }

    pub fn verify(&self, candidate: &str) -> bool {
        candidate == self.secret
    }

    pub fn uses_default(&self) -> bool {
        self.uses_default
    }
}

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{invalid_input_error, invalid_state_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Customer {
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub verification: Verification,
    pub created_at: DateTime<Utc>,
}

// The code lives on the customer document only; it never travels back to
// the client that asked for it.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Verification {
    Unverified,
    CodePending {
        code: String,
        expires_at: DateTime<Utc>,
    },
    Verified,
}

// Customers flow through instrumented spans, so the stored code must never
// render. Only the expiry is worth seeing in a trace anyway.
impl fmt::Debug for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unverified => f.write_str("Unverified"),
            Self::CodePending { code: _, expires_at } => f
                .debug_struct("CodePending")
                .field("code", &"<redacted>")
                .field("expires_at", expires_at)
                .finish(),
            Self::Verified => f.write_str("Verified"),
        }
    }
}

impl Verification {
    pub fn name(&self) -> String {
        match self {
            Self::Unverified => "unverified".into(),
            Self::CodePending {
                code: _,
                expires_at: _,
            } => "code_pending".into(),
            Self::Verified => "verified".into(),
        }
    }
}

impl Customer {
    pub fn new(email: String) -> Self {
        Self {
            email,
            name: None,
            phone: None,
            verification: Verification::Unverified,
            created_at: Utc::now(),
        }
    }

    pub fn is_verified(&self) -> bool {
        match self.verification {
            Verification::Verified => true,
            _ => false,
        }
    }

    // Re-issuing is always allowed; a fresh code replaces whatever was
    // pending before.
    #[tracing::instrument(skip_all)]
    pub fn issue_code(&mut self, code: String) {
        self.verification = Verification::CodePending {
            code,
            expires_at: Utc::now() + Duration::minutes(5),
        };
    }

    #[tracing::instrument(skip_all)]
    pub fn verify_code(&mut self, code: &str) -> Result<(), Error> {
        match &self.verification {
            Verification::CodePending { code: expected, expires_at } => {
                if Utc::now() >= *expires_at {
                    return Err(invalid_input_error());
                }

                if expected != code {
                    return Err(invalid_input_error());
                }

                self.verification = Verification::Verified;
                Ok(())
            }
            _ => Err(invalid_state_error()),
        }
    }
}

use crate::error::{ChartError, Result};

/// Authenticated user of a remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub access_token: String,
}

/// Session passed explicitly to every authenticated remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Authenticated(Identity),
    NotAuthenticated,
}

impl Session {
    pub fn authenticated(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Session::Authenticated(Identity {
            user_id: user_id.into(),
            access_token: access_token.into(),
        })
    }

    /// Identity for an authenticated call, `AuthMissing` otherwise.
    pub fn identity(&self) -> Result<&Identity> {
        match self {
            Session::Authenticated(identity) if !identity.user_id.is_empty() => Ok(identity),
            _ => Err(ChartError::AuthMissing),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_ok()
    }
}

use crate::domain::username::Username;

/// Identity of the caller, resolved per request by a `SessionAuthenticator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    username: Username,
}

impl AuthenticatedSession {
    pub fn new(username: Username) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }
}

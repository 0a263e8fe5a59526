//! Contracts for the external sign-in collaborator.
//!
//! The wizard only needs the two exchanges: credentials in, outcome out, and
//! a yes/no check on a previously issued token. There is no cancellation and
//! no request fencing; a stale response is handled the same as a fresh one.

use serde::{Deserialize, Serialize};

/// Credentials submitted from the sign-in screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The signed-in account as the wizard sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Outcome of a login exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn granted(token: String, user: AccountUser) -> Self {
        Self {
            success: true,
            token: Some(token),
            user: Some(user),
            message: None,
        }
    }

    pub fn denied(message: &str) -> Self {
        Self {
            success: false,
            token: None,
            user: None,
            message: Some(message.to_string()),
        }
    }
}

/// Boundary to the identity provider. Implementations are injected so routes
/// and tests can swap in their own.
pub trait AuthGateway: Send + Sync {
    fn login(&self, credentials: &Credentials) -> LoginResponse;

    fn validate_token(&self, token: &str) -> bool;
}

/// Deterministic gateway standing in until a real identity provider is wired
/// up. Accepts one fixed account and issues one fixed token.
#[derive(Debug, Clone)]
pub struct StubAuthGateway {
    email: String,
    password: String,
    token: String,
}

impl Default for StubAuthGateway {
    fn default() -> Self {
        Self {
            email: "user@example.com".to_string(),
            password: "disclosure-demo".to_string(),
            token: "stub-session-token".to_string(),
        }
    }
}

impl StubAuthGateway {
    pub fn new(email: &str, password: &str, token: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            token: token.to_string(),
        }
    }
}

impl AuthGateway for StubAuthGateway {
    fn login(&self, credentials: &Credentials) -> LoginResponse {
        if credentials.email == self.email && credentials.password == self.password {
            LoginResponse::granted(
                self.token.clone(),
                AccountUser {
                    id: "1".to_string(),
                    email: self.email.clone(),
                    name: "John Doe".to_string(),
                },
            )
        } else {
            LoginResponse::denied("Invalid email or password")
        }
    }

    fn validate_token(&self, token: &str) -> bool {
        token == self.token
    }
}

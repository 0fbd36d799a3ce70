//! Session-stored authenticated visitor.

use serde::{Deserialize, Serialize};

/// Visitor signed in against the external auth backend.
///
/// Only what the templates and the payment gate need is kept; the token is
/// never rendered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub token: String,
}

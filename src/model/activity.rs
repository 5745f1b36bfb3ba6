use serde::{Deserialize, Serialize};

categorical!(ActivityKind {
    UserCreated => "user_created",
    Security => "security",
    Alert => "alert",
    Settings => "settings",
    Login => "login",
    PasswordReset => "password_reset",
});

/// One entry of the dashboard's recent activity feed, newest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    /// An admin email, or `system` for automated events.
    pub actor: String,
    pub timestamp: String,
}

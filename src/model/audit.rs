use serde::{Deserialize, Serialize};

categorical!(
    /// Category an admin action is filed under in the audit log.
    ActionType {
        User => "user",
        Security => "security",
        Settings => "settings",
        Auth => "auth",
        Alert => "alert",
    }
);

categorical!(AuditOutcome {
    Success => "success",
    Failed => "failed",
    Pending => "pending",
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub timestamp: String,
    pub actor_email: String,
    pub action: String,
    pub action_type: ActionType,
    /// `kind:identifier`, e.g. `user:john@spam.com` or `config:rate_limits`.
    pub resource: String,
    pub status: AuditOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

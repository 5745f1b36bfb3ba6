use serde::{Deserialize, Serialize};

categorical!(
    /// Subscription tier of an individual account.
    UserPlan {
        Free => "free",
        Pro => "pro",
        Business => "business",
        Enterprise => "enterprise",
    }
);

categorical!(UserStatus {
    Active => "active",
    Suspended => "suspended",
    Pending => "pending",
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub plan: UserPlan,
    pub status: UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub created_at: String,
}

use serde::{Deserialize, Serialize};

categorical!(
    /// Team plans start at `pro`; there is no free organization tier.
    OrganizationPlan {
        Pro => "pro",
        Business => "business",
        Enterprise => "enterprise",
    }
);

categorical!(MemberRole {
    Owner => "owner",
    Admin => "admin",
    Member => "member",
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub owner_email: String,
    pub plan: OrganizationPlan,
    pub members_count: u32,
    pub created_at: String,
    /// Subscription id at the billing provider, e.g. `sub_...`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_reference: Option<String>,
    /// Monthly recurring revenue in whole dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrr: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationMember {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub joined_at: String,
}

use serde::{Deserialize, Serialize};

categorical!(TicketStatus {
    Open => "open",
    InProgress => "in_progress",
    Closed => "closed",
});

categorical!(TicketPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
            Self::Unrecognized(_) => "Unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub submitter_email: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    /// Free-form, the console shows relative times such as "2 hours ago".
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

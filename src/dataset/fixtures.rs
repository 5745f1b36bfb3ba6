use crate::health::{ServiceHealth, ServiceStatus};
use crate::model::{
    ActionType, Activity, ActivityKind, AuditEntry, AuditOutcome, MemberRole, Organization,
    OrganizationMember, OrganizationPlan, Ticket, TicketPriority, TicketStatus, User, UserPlan,
    UserStatus,
};

fn user(
    id: &str,
    email: &str,
    name: &str,
    plan: UserPlan,
    status: UserStatus,
    organization: Option<&str>,
    created_at: &str,
) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        plan,
        status,
        organization: organization.map(str::to_string),
        created_at: created_at.to_string(),
    }
}

pub(super) fn users() -> Vec<User> {
    vec![
        user(
            "1",
            "john@company.com",
            "John Smith",
            UserPlan::Enterprise,
            UserStatus::Active,
            Some("Acme Corp"),
            "2024-01-15",
        ),
        user(
            "2",
            "sarah@startup.io",
            "Sarah Johnson",
            UserPlan::Pro,
            UserStatus::Active,
            None,
            "2024-02-20",
        ),
        user(
            "3",
            "mike@example.com",
            "Mike Williams",
            UserPlan::Free,
            UserStatus::Pending,
            None,
            "2024-03-10",
        ),
        user(
            "4",
            "emma@business.com",
            "Emma Davis",
            UserPlan::Business,
            UserStatus::Active,
            Some("Tech Solutions"),
            "2024-01-28",
        ),
        user(
            "5",
            "david@corp.net",
            "David Brown",
            UserPlan::Pro,
            UserStatus::Suspended,
            None,
            "2023-12-05",
        ),
    ]
}

fn organization(
    id: &str,
    name: &str,
    owner_email: &str,
    plan: OrganizationPlan,
    members_count: u32,
    created_at: &str,
) -> Organization {
    Organization {
        id: id.to_string(),
        name: name.to_string(),
        owner_email: owner_email.to_string(),
        plan,
        members_count,
        created_at: created_at.to_string(),
        billing_reference: None,
        mrr: None,
    }
}

pub(super) fn organizations() -> Vec<Organization> {
    let mut acme = organization(
        "1",
        "Acme Corp",
        "ceo@acme.com",
        OrganizationPlan::Enterprise,
        47,
        "2023-06-15",
    );
    acme.billing_reference = Some("sub_1N2m3O4p5Q6r7S8t".to_string());
    acme.mrr = Some(2350);
    vec![
        acme,
        organization(
            "2",
            "Tech Solutions",
            "admin@techsolutions.com",
            OrganizationPlan::Business,
            12,
            "2023-09-22",
        ),
        organization(
            "3",
            "StartupXYZ",
            "founder@startupxyz.io",
            OrganizationPlan::Pro,
            5,
            "2024-01-10",
        ),
        organization(
            "4",
            "Global Industries",
            "it@globalind.com",
            OrganizationPlan::Enterprise,
            156,
            "2022-11-05",
        ),
    ]
}

pub(super) fn members() -> Vec<OrganizationMember> {
    [
        ("1", "John CEO", "ceo@acme.com", MemberRole::Owner, "2023-06-15"),
        ("2", "Sarah CTO", "cto@acme.com", MemberRole::Admin, "2023-06-16"),
        ("3", "Mike Dev", "mike@acme.com", MemberRole::Member, "2023-07-01"),
        ("4", "Emma HR", "emma@acme.com", MemberRole::Member, "2023-08-15"),
    ]
    .into_iter()
    .map(|(id, name, email, role, joined_at)| OrganizationMember {
        id: id.to_string(),
        organization_id: "1".to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        joined_at: joined_at.to_string(),
    })
    .collect()
}

fn ticket(
    id: &str,
    subject: &str,
    submitter_email: &str,
    status: TicketStatus,
    priority: TicketPriority,
    created_at: &str,
    assignee: Option<&str>,
) -> Ticket {
    Ticket {
        id: id.to_string(),
        subject: subject.to_string(),
        submitter_email: submitter_email.to_string(),
        status,
        priority,
        created_at: created_at.to_string(),
        assignee: assignee.map(str::to_string),
    }
}

pub(super) fn tickets() -> Vec<Ticket> {
    vec![
        ticket(
            "TKT-001",
            "Unable to access email analysis feature",
            "john@company.com",
            TicketStatus::Open,
            TicketPriority::High,
            "2 hours ago",
            None,
        ),
        ticket(
            "TKT-002",
            "Billing question about enterprise plan",
            "finance@acme.com",
            TicketStatus::InProgress,
            TicketPriority::Medium,
            "5 hours ago",
            Some("support@mxlens.com"),
        ),
        ticket(
            "TKT-003",
            "Request for API rate limit increase",
            "developer@startup.io",
            TicketStatus::Open,
            TicketPriority::Low,
            "1 day ago",
            None,
        ),
        ticket(
            "TKT-004",
            "Account compromised - urgent security issue",
            "security@corp.net",
            TicketStatus::InProgress,
            TicketPriority::Urgent,
            "30 minutes ago",
            Some("secops@mxlens.com"),
        ),
        ticket(
            "TKT-005",
            "Feature request: Export analytics data",
            "product@techco.com",
            TicketStatus::Closed,
            TicketPriority::Low,
            "3 days ago",
            Some("support@mxlens.com"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn audit(
    id: &str,
    timestamp: &str,
    actor_email: &str,
    action: &str,
    action_type: ActionType,
    resource: &str,
    status: AuditOutcome,
    details: Option<&str>,
) -> AuditEntry {
    AuditEntry {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        actor_email: actor_email.to_string(),
        action: action.to_string(),
        action_type,
        resource: resource.to_string(),
        status,
        details: details.map(str::to_string),
    }
}

pub(super) fn audit_log() -> Vec<AuditEntry> {
    vec![
        audit(
            "1",
            "2024-03-15 14:32:15",
            "admin@mxlens.com",
            "User account suspended",
            ActionType::User,
            "user:john@spam.com",
            AuditOutcome::Success,
            None,
        ),
        audit(
            "2",
            "2024-03-15 14:28:00",
            "secops@mxlens.com",
            "Rate limit updated",
            ActionType::Security,
            "config:rate_limits",
            AuditOutcome::Success,
            None,
        ),
        audit(
            "3",
            "2024-03-15 14:15:22",
            "cto@mxlens.com",
            "Feature flag enabled",
            ActionType::Settings,
            "feature:advanced_analytics",
            AuditOutcome::Success,
            None,
        ),
        audit(
            "4",
            "2024-03-15 13:45:00",
            "support@mxlens.com",
            "Password reset initiated",
            ActionType::Auth,
            "user:customer@company.com",
            AuditOutcome::Pending,
            Some("Awaiting second approval"),
        ),
        audit(
            "5",
            "2024-03-15 13:20:11",
            "admin@mxlens.com",
            "Failed login attempt detected",
            ActionType::Alert,
            "user:admin@mxlens.com",
            AuditOutcome::Failed,
            Some("IP: 192.168.1.100 - 5 failed attempts"),
        ),
    ]
}

pub(super) fn services() -> Vec<ServiceHealth> {
    [
        ("API Gateway", ServiceStatus::Healthy, "23ms"),
        ("Database", ServiceStatus::Healthy, "12ms"),
        ("Auth Service", ServiceStatus::Healthy, "45ms"),
        ("Analysis Engine", ServiceStatus::Healthy, "156ms"),
        ("Email Service", ServiceStatus::Degraded, "1.2s"),
        ("CDN", ServiceStatus::Healthy, "8ms"),
    ]
    .into_iter()
    .map(|(name, status, latency)| ServiceHealth {
        name: name.to_string(),
        status,
        latency: Some(latency.to_string()),
    })
    .collect()
}

pub(super) fn activity() -> Vec<Activity> {
    [
        (
            "1",
            ActivityKind::Login,
            "Admin logged in from new device",
            "admin@mxlens.com",
            "2 minutes ago",
        ),
        (
            "2",
            ActivityKind::UserCreated,
            "New user account created",
            "support@mxlens.com",
            "15 minutes ago",
        ),
        (
            "3",
            ActivityKind::Security,
            "Rate limit triggered for API endpoint",
            "system",
            "1 hour ago",
        ),
        (
            "4",
            ActivityKind::Settings,
            "Feature flag 'advanced_analytics' enabled",
            "cto@mxlens.com",
            "2 hours ago",
        ),
        (
            "5",
            ActivityKind::PasswordReset,
            "Password reset approved for user",
            "admin@mxlens.com",
            "3 hours ago",
        ),
        (
            "6",
            ActivityKind::Alert,
            "High error rate detected on analysis endpoint",
            "system",
            "4 hours ago",
        ),
    ]
    .into_iter()
    .map(|(id, kind, message, actor, timestamp)| Activity {
        id: id.to_string(),
        kind,
        message: message.to_string(),
        actor: actor.to_string(),
        timestamp: timestamp.to_string(),
    })
    .collect()
}

use colored::{ColoredString, Colorize};

use crate::dashboard::DashboardSummary;
use crate::dataset::{OrganizationDetail, UserDetail};
use crate::health::{HealthReport, ServiceHealth, ServiceStatus, SystemStatus};
use crate::model::{
    ActionType, Activity, ActivityKind, AuditEntry, AuditOutcome, MemberRole, Organization,
    OrganizationMember, OrganizationPlan, Ticket, TicketPriority, TicketStatus, User, UserPlan,
    UserStatus,
};
use crate::nav::NavItem;
use crate::settings::{FeatureFlag, Settings};

/// Plain-text rendering used by the `text` output format.
pub trait TextRender {
    fn render_text(&self) -> String;
}

#[derive(Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Error,
    Info,
    Muted,
}

// Pad before coloring so escape codes don't eat into the column width.
fn badge(label: &str, width: usize, tone: Tone) -> ColoredString {
    let padded = format!("{label:<width$}");
    match tone {
        Tone::Success => padded.green(),
        Tone::Warning => padded.yellow(),
        Tone::Error => padded.red(),
        Tone::Info => padded.blue(),
        Tone::Muted => padded.dimmed(),
    }
}

fn kv_line(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(":: {:<10}: {}\n", label, value));
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn user_plan_tone(plan: &UserPlan) -> Tone {
    match plan {
        UserPlan::Enterprise => Tone::Success,
        UserPlan::Business => Tone::Warning,
        UserPlan::Pro => Tone::Info,
        UserPlan::Free | UserPlan::Unrecognized(_) => Tone::Muted,
    }
}

fn user_status_tone(status: &UserStatus) -> Tone {
    match status {
        UserStatus::Active => Tone::Success,
        UserStatus::Pending => Tone::Warning,
        UserStatus::Suspended => Tone::Error,
        UserStatus::Unrecognized(_) => Tone::Muted,
    }
}

fn org_plan_tone(plan: &OrganizationPlan) -> Tone {
    match plan {
        OrganizationPlan::Enterprise => Tone::Success,
        OrganizationPlan::Business => Tone::Warning,
        OrganizationPlan::Pro => Tone::Info,
        OrganizationPlan::Unrecognized(_) => Tone::Muted,
    }
}

fn ticket_status_tone(status: &TicketStatus) -> Tone {
    match status {
        TicketStatus::Open => Tone::Warning,
        TicketStatus::InProgress => Tone::Muted,
        TicketStatus::Closed => Tone::Success,
        TicketStatus::Unrecognized(_) => Tone::Muted,
    }
}

fn priority_tone(priority: &TicketPriority) -> Tone {
    match priority {
        TicketPriority::Urgent => Tone::Error,
        TicketPriority::High => Tone::Warning,
        TicketPriority::Medium => Tone::Info,
        TicketPriority::Low | TicketPriority::Unrecognized(_) => Tone::Muted,
    }
}

fn action_tone(kind: &ActionType) -> Tone {
    match kind {
        ActionType::User | ActionType::Auth => Tone::Info,
        ActionType::Security => Tone::Warning,
        ActionType::Alert => Tone::Error,
        ActionType::Settings | ActionType::Unrecognized(_) => Tone::Muted,
    }
}

fn outcome_tone(outcome: &AuditOutcome) -> Tone {
    match outcome {
        AuditOutcome::Success => Tone::Success,
        AuditOutcome::Pending => Tone::Warning,
        AuditOutcome::Failed => Tone::Error,
        AuditOutcome::Unrecognized(_) => Tone::Muted,
    }
}

fn activity_tone(kind: &ActivityKind) -> Tone {
    match kind {
        ActivityKind::UserCreated => Tone::Success,
        ActivityKind::Security | ActivityKind::Login => Tone::Info,
        ActivityKind::Alert | ActivityKind::PasswordReset => Tone::Warning,
        ActivityKind::Settings | ActivityKind::Unrecognized(_) => Tone::Muted,
    }
}

fn service_tone(status: &ServiceStatus) -> Tone {
    match status {
        ServiceStatus::Healthy => Tone::Success,
        ServiceStatus::Degraded => Tone::Warning,
        ServiceStatus::Down | ServiceStatus::Unrecognized(_) => Tone::Error,
    }
}

fn system_tone(status: SystemStatus) -> Tone {
    match status {
        SystemStatus::Operational => Tone::Success,
        SystemStatus::PartialOutage => Tone::Warning,
        SystemStatus::MajorOutage => Tone::Error,
    }
}

impl TextRender for User {
    fn render_text(&self) -> String {
        format!(
            "{:<6} {:<18} {:<26} {} {} {:<16} {}",
            self.id,
            self.name,
            self.email,
            badge(&self.plan.to_string(), 10, user_plan_tone(&self.plan)),
            badge(&self.status.to_string(), 9, user_status_tone(&self.status)),
            or_dash(self.organization.as_deref()),
            self.created_at
        )
    }
}

impl TextRender for Organization {
    fn render_text(&self) -> String {
        format!(
            "{:<6} {:<18} {:<26} {} {:>5} members  {}",
            self.id,
            self.name,
            self.owner_email,
            badge(&self.plan.to_string(), 10, org_plan_tone(&self.plan)),
            self.members_count,
            self.created_at
        )
    }
}

impl TextRender for OrganizationMember {
    fn render_text(&self) -> String {
        let tone = match &self.role {
            MemberRole::Owner => Tone::Success,
            MemberRole::Admin => Tone::Info,
            MemberRole::Member | MemberRole::Unrecognized(_) => Tone::Muted,
        };
        format!(
            "{:<6} {:<18} {:<26} {} {}",
            self.id,
            self.name,
            self.email,
            badge(&self.role.to_string(), 7, tone),
            self.joined_at
        )
    }
}

impl TextRender for Ticket {
    fn render_text(&self) -> String {
        format!(
            "{:<8} {} {} {:<46} {:<24} {:<16} {}",
            self.id,
            badge(self.status.label(), 11, ticket_status_tone(&self.status)),
            badge(&self.priority.to_string(), 7, priority_tone(&self.priority)),
            self.subject,
            self.submitter_email,
            self.created_at,
            or_dash(self.assignee.as_deref())
        )
    }
}

impl TextRender for AuditEntry {
    fn render_text(&self) -> String {
        let mut line = format!(
            "{} {} {:<22} {:<32} {:<30} {}",
            self.timestamp,
            badge(&self.action_type.to_string(), 8, action_tone(&self.action_type)),
            self.actor_email,
            self.action,
            self.resource,
            badge(&self.status.to_string(), 7, outcome_tone(&self.status)),
        );
        if let Some(details) = self.details.as_deref() {
            line.push_str(&format!("\n    {}", details.dimmed()));
        }
        line
    }
}

impl TextRender for Activity {
    fn render_text(&self) -> String {
        format!(
            "{:<4} {} {:<46} {:<20} {}",
            self.id,
            badge(&self.kind.to_string(), 14, activity_tone(&self.kind)),
            self.message,
            self.actor,
            self.timestamp.dimmed()
        )
    }
}

impl TextRender for FeatureFlag {
    fn render_text(&self) -> String {
        let state = if self.enabled {
            badge("on", 3, Tone::Success)
        } else {
            badge("off", 3, Tone::Muted)
        };
        format!(
            "{} {:<22} {:<20} {}",
            state,
            self.id,
            self.name,
            self.description.dimmed()
        )
    }
}

impl TextRender for Settings {
    fn render_text(&self) -> String {
        let mut out = String::from("Feature flags\n");
        for flag in &self.feature_flags {
            out.push_str(&flag.render_text());
            out.push('\n');
        }
        out.push_str("\nRate limits\n");
        let limits = &self.rate_limits;
        let analysis = format!("{}/min per user", limits.analysis_per_minute);
        let api = format!("{}/hour per key", limits.api_requests_per_hour);
        let logins = format!("{}/hour per IP", limits.login_attempts_per_hour);
        kv_line(&mut out, "Analysis", &analysis);
        kv_line(&mut out, "API", &api);
        kv_line(&mut out, "Logins", &logins);
        out.push_str("\nMaintenance\n");
        let maintenance = &self.maintenance;
        let mode = if maintenance.enabled { "on" } else { "off" };
        kv_line(&mut out, "Mode", mode);
        kv_line(&mut out, "Status URL", or_dash(maintenance.status_page_url.as_deref()));
        if !self.api_status.is_empty() {
            out.push_str("\nAPI status\n");
            for endpoint in &self.api_status {
                out.push_str(&endpoint.render_text());
                out.push('\n');
            }
        }
        out.trim_end().to_string()
    }
}

impl TextRender for ServiceHealth {
    fn render_text(&self) -> String {
        format!(
            "{:<18} {} {}",
            self.name,
            badge(&self.status.to_string(), 8, service_tone(&self.status)),
            or_dash(self.latency.as_deref())
        )
    }
}

impl TextRender for HealthReport {
    fn render_text(&self) -> String {
        let mut out = format!(
            ":: {} ::\n",
            badge(self.status.label(), 0, system_tone(self.status)).bold()
        );
        for service in &self.services {
            out.push_str(&service.render_text());
            out.push('\n');
        }
        out.trim_end().to_string()
    }
}

impl TextRender for NavItem {
    fn render_text(&self) -> String {
        format!("{:<16} {}", self.label, self.href)
    }
}

impl TextRender for UserDetail {
    fn render_text(&self) -> String {
        let u = &self.user;
        let mut out = String::new();
        out.push_str(&format!("{}\n", u.name.bold()));
        kv_line(&mut out, "Email", &u.email);
        kv_line(&mut out, "Plan", &u.plan.to_string());
        kv_line(&mut out, "Status", &u.status.to_string());
        kv_line(&mut out, "Org", or_dash(u.organization.as_deref()));
        kv_line(&mut out, "Created", &u.created_at);
        if let Some(org) = self.organization.as_ref() {
            kv_line(&mut out, "Org owner", &org.owner_email);
            kv_line(&mut out, "Org plan", &org.plan.to_string());
        }
        out.trim_end().to_string()
    }
}

impl TextRender for OrganizationDetail {
    fn render_text(&self) -> String {
        let o = &self.organization;
        let mut out = String::new();
        out.push_str(&format!("{}\n", o.name.bold()));
        kv_line(&mut out, "Owner", &o.owner_email);
        kv_line(&mut out, "Plan", &o.plan.to_string());
        kv_line(&mut out, "Members", &o.members_count.to_string());
        kv_line(&mut out, "Created", &o.created_at);
        kv_line(&mut out, "Billing", or_dash(o.billing_reference.as_deref()));
        let mrr = o.mrr.map(|v| format!("${v}"));
        kv_line(&mut out, "MRR", or_dash(mrr.as_deref()));
        if !self.members.is_empty() {
            out.push_str("\nMembers\n");
            for m in &self.members {
                out.push_str(&m.render_text());
                out.push('\n');
            }
        }
        if !self.users.is_empty() {
            out.push_str("\nUsers\n");
            for u in &self.users {
                out.push_str(&u.render_text());
                out.push('\n');
            }
        }
        out.trim_end().to_string()
    }
}

impl TextRender for DashboardSummary {
    fn render_text(&self) -> String {
        let mut out = String::new();
        kv_line(
            &mut out,
            "Users",
            &format!("{} ({} active)", self.total_users, self.active_users),
        );
        kv_line(&mut out, "Orgs", &self.organizations.to_string());
        kv_line(
            &mut out,
            "Tickets",
            &format!("{} open, {} urgent", self.open_tickets, self.urgent_tickets),
        );
        kv_line(&mut out, "Failures", &self.failed_audit_events.to_string());
        kv_line(&mut out, "MRR", &format!("${}", self.total_mrr));
        kv_line(&mut out, "Systems", self.system_status.label());
        if !self.recent_activity.is_empty() {
            out.push_str("\nRecent activity\n");
            for activity in &self.recent_activity {
                out.push_str(&activity.render_text());
                out.push('\n');
            }
        }
        out.trim_end().to_string()
    }
}

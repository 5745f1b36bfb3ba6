use serde::Serialize;

use crate::dataset::Dataset;
use crate::filter::{matching, RecordQuery};
use crate::health::{self, SystemStatus};
use crate::model::Activity;

/// The feed shows the newest admin actions only.
pub const RECENT_ACTIVITY_LIMIT: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_users: usize,
    pub active_users: usize,
    pub organizations: usize,
    pub open_tickets: usize,
    pub urgent_tickets: usize,
    pub failed_audit_events: usize,
    pub total_mrr: u64,
    pub system_status: SystemStatus,
    pub recent_activity: Vec<Activity>,
}

impl DashboardSummary {
    pub fn from_dataset(ds: &Dataset) -> Self {
        let active = RecordQuery::default().with_filter("status", "active");
        let open = RecordQuery::default().with_filter("status", "open");
        let urgent = RecordQuery::default().with_filter("priority", "urgent");
        let failed = RecordQuery::default().with_filter("status", "failed");

        Self {
            total_users: ds.users.len(),
            active_users: matching(&ds.users, &active).count(),
            organizations: ds.organizations.len(),
            open_tickets: matching(&ds.tickets, &open).count(),
            urgent_tickets: matching(&ds.tickets, &urgent).count(),
            failed_audit_events: matching(&ds.audit_log, &failed).count(),
            total_mrr: ds.organizations.iter().filter_map(|o| o.mrr).sum(),
            system_status: health::rollup(&ds.services),
            recent_activity: ds
                .activity
                .iter()
                .take(RECENT_ACTIVITY_LIMIT)
                .cloned()
                .collect(),
        }
    }
}

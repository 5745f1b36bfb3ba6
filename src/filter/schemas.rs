use super::{CategoryField, FilterSchema, Filterable, TextField};
use crate::model::{Activity, AuditEntry, Organization, Ticket, User};

pub static USER_SCHEMA: FilterSchema<User> = FilterSchema {
    entity: "user",
    searchable: &[
        TextField {
            name: "email",
            get: |u| u.email.as_str(),
        },
        TextField {
            name: "name",
            get: |u| u.name.as_str(),
        },
    ],
    categorical: &[
        CategoryField {
            name: "plan",
            values: crate::model::UserPlan::VALUES,
            get: |u| u.plan.as_str(),
        },
        CategoryField {
            name: "status",
            values: crate::model::UserStatus::VALUES,
            get: |u| u.status.as_str(),
        },
    ],
};

pub static ORGANIZATION_SCHEMA: FilterSchema<Organization> = FilterSchema {
    entity: "organization",
    searchable: &[
        TextField {
            name: "name",
            get: |o| o.name.as_str(),
        },
        TextField {
            name: "owner_email",
            get: |o| o.owner_email.as_str(),
        },
    ],
    categorical: &[CategoryField {
        name: "plan",
        values: crate::model::OrganizationPlan::VALUES,
        get: |o| o.plan.as_str(),
    }],
};

pub static TICKET_SCHEMA: FilterSchema<Ticket> = FilterSchema {
    entity: "ticket",
    searchable: &[
        TextField {
            name: "subject",
            get: |t| t.subject.as_str(),
        },
        TextField {
            name: "submitter_email",
            get: |t| t.submitter_email.as_str(),
        },
    ],
    categorical: &[
        CategoryField {
            name: "status",
            values: crate::model::TicketStatus::VALUES,
            get: |t| t.status.as_str(),
        },
        CategoryField {
            name: "priority",
            values: crate::model::TicketPriority::VALUES,
            get: |t| t.priority.as_str(),
        },
    ],
};

// "action" selects on the action category, not the free-text action.
pub static AUDIT_SCHEMA: FilterSchema<AuditEntry> = FilterSchema {
    entity: "audit",
    searchable: &[
        TextField {
            name: "actor_email",
            get: |e| e.actor_email.as_str(),
        },
        TextField {
            name: "action",
            get: |e| e.action.as_str(),
        },
        TextField {
            name: "resource",
            get: |e| e.resource.as_str(),
        },
    ],
    categorical: &[
        CategoryField {
            name: "action",
            values: crate::model::ActionType::VALUES,
            get: |e| e.action_type.as_str(),
        },
        CategoryField {
            name: "status",
            values: crate::model::AuditOutcome::VALUES,
            get: |e| e.status.as_str(),
        },
    ],
};

pub static ACTIVITY_SCHEMA: FilterSchema<Activity> = FilterSchema {
    entity: "activity",
    searchable: &[
        TextField {
            name: "message",
            get: |a| a.message.as_str(),
        },
        TextField {
            name: "actor",
            get: |a| a.actor.as_str(),
        },
    ],
    categorical: &[CategoryField {
        name: "type",
        values: crate::model::ActivityKind::VALUES,
        get: |a| a.kind.as_str(),
    }],
};

impl Filterable for User {
    fn schema() -> &'static FilterSchema<Self> {
        &USER_SCHEMA
    }
}

impl Filterable for Organization {
    fn schema() -> &'static FilterSchema<Self> {
        &ORGANIZATION_SCHEMA
    }
}

impl Filterable for Ticket {
    fn schema() -> &'static FilterSchema<Self> {
        &TICKET_SCHEMA
    }
}

impl Filterable for AuditEntry {
    fn schema() -> &'static FilterSchema<Self> {
        &AUDIT_SCHEMA
    }
}

impl Filterable for Activity {
    fn schema() -> &'static FilterSchema<Self> {
        &ACTIVITY_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::filter::{filter_records, RecordQuery};

    #[test]
    fn ticket_search_ignores_case() {
        let tickets = Dataset::builtin().tickets;
        for search in ["billing", "BILLING", "Billing"] {
            let q = RecordQuery::new(search).with_filter("status", "all");
            let out = filter_records(&tickets, &q);
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].id, "TKT-002");
        }
    }

    #[test]
    fn audit_search_covers_resource() {
        let log = Dataset::builtin().audit_log;
        let out = filter_records(&log, &RecordQuery::new("rate_limits"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].action, "Rate limit updated");
    }

    #[test]
    fn audit_action_selects_on_category() {
        let log = Dataset::builtin().audit_log;
        let q = RecordQuery::new("").with_filter("action", "alert");
        let out = filter_records(&log, &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].action, "Failed login attempt detected");

        // Free-text action words are not category values.
        let q = RecordQuery::new("").with_filter("action", "Rate limit updated");
        assert!(filter_records(&log, &q).is_empty());
    }

    #[test]
    fn organization_search_covers_owner_email() {
        let orgs = Dataset::builtin().organizations;
        let out = filter_records(&orgs, &RecordQuery::new("globalind"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Global Industries");
    }

    #[test]
    fn activity_filters_by_actor_and_type() {
        let feed = Dataset::builtin().activity;
        let out = filter_records(&feed, &RecordQuery::new("SYSTEM"));
        let ids: Vec<_> = out.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "6"]);

        let q = RecordQuery::new("system").with_filter("type", "alert");
        let out = filter_records(&feed, &q);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "High error rate detected on analysis endpoint");
    }

    #[test]
    fn schemas_name_their_fields() {
        assert_eq!(USER_SCHEMA.searchable_names(), vec!["email", "name"]);
        assert_eq!(TICKET_SCHEMA.category_names(), vec!["status", "priority"]);
        assert!(ORGANIZATION_SCHEMA.category("status").is_none());
        assert_eq!(ACTIVITY_SCHEMA.category_names(), vec!["type"]);
        assert_eq!(
            AUDIT_SCHEMA.category("action").map(|f| f.values.len()),
            Some(5)
        );
    }
}

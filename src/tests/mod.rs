use crate::dataset::Dataset;
use crate::filter::{filter_records, matching, RecordQuery};
use crate::model::{User, UserPlan, UserStatus};
use crate::output::{render_list, OutputFormat};

fn two_users() -> Vec<User> {
    let ds = Dataset::builtin();
    ds.users.into_iter().take(2).collect()
}

#[test]
fn empty_query_returns_every_collection_unchanged() {
    let ds = Dataset::builtin();
    let q = RecordQuery::default();
    assert_eq!(filter_records(&ds.users, &q), ds.users);
    assert_eq!(filter_records(&ds.organizations, &q), ds.organizations);
    assert_eq!(filter_records(&ds.tickets, &q), ds.tickets);
    assert_eq!(filter_records(&ds.audit_log, &q), ds.audit_log);
}

#[test]
fn john_matches_name_and_email_substrings() {
    let users = two_users();
    assert_eq!(users[0].name, "John Smith");
    assert_eq!(users[1].name, "Sarah Johnson");

    let q = RecordQuery::new("john")
        .with_filter("plan", "all")
        .with_filter("status", "all");
    let out = filter_records(&users, &q);
    assert_eq!(out.first().map(|u| u.id.as_str()), Some("1"));

    let q = RecordQuery::new("john smith");
    assert_eq!(filter_records(&users, &q), vec![users[0].clone()]);
}

#[test]
fn single_suspended_user_is_selected() {
    let users = Dataset::builtin().users;
    let q = RecordQuery::new("").with_filter("status", "suspended");
    let out = filter_records(&users, &q);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "David Brown");
    assert_eq!(out[0].status, UserStatus::Suspended);
}

#[test]
fn billing_ticket_found_regardless_of_case() {
    let tickets = Dataset::builtin().tickets;
    for search in ["billing", "BiLLiNG"] {
        let q = RecordQuery::new(search).with_filter("status", "all");
        let subjects: Vec<_> = matching(&tickets, &q).map(|t| t.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Billing question about enterprise plan"]);
    }
}

#[test]
fn plan_and_status_conjunction_on_builtin_users() {
    let users = Dataset::builtin().users;
    let both = RecordQuery::new("")
        .with_filter("status", "active")
        .with_filter("plan", "pro");
    let out = filter_records(&users, &both);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].email, "sarah@startup.io");
    assert_eq!(out[0].plan, UserPlan::Pro);
}

#[test]
fn no_match_is_an_empty_result() {
    let ds = Dataset::builtin();
    let q = RecordQuery::new("nobody-here");
    assert!(filter_records(&ds.users, &q).is_empty());
    let q = RecordQuery::new("")
        .with_filter("priority", "urgent")
        .with_filter("status", "closed");
    assert!(filter_records(&ds.tickets, &q).is_empty());
}

#[test]
fn whitespace_search_is_not_trimmed() {
    let users = Dataset::builtin().users;
    // Every display name has a space; no email does.
    assert_eq!(filter_records(&users, &RecordQuery::new(" ")).len(), 5);
    assert!(filter_records(&users, &RecordQuery::new("  ")).is_empty());
}

#[test]
fn dataset_file_records_flow_through_filter() {
    let yaml = r#"
organizations:
  - id: "9"
    name: Initech
    owner_email: bill@initech.com
    plan: enterprise
    members_count: 3
    created_at: "2024-06-01"
  - id: "10"
    name: Hooli
    owner_email: gavin@hooli.xyz
    plan: Enterprise
    members_count: 900
    created_at: "2024-06-02"
"#;
    let ds = crate::dataset::parse_dataset(yaml, std::path::Path::new("orgs.yaml")).unwrap();
    let q = RecordQuery::new("").with_filter("plan", "enterprise");
    let names: Vec<_> = matching(&ds.organizations, &q).map(|o| o.name.as_str()).collect();
    // "Enterprise" is not a recognized plan value and never matches.
    assert_eq!(names, vec!["Initech"]);
}

#[test]
fn unrecognized_values_survive_export() {
    let yaml = r#"
users:
  - id: "a"
    email: ann@example.com
    name: Ann
    plan: platinum
    status: active
    created_at: "2024-05-01"
"#;
    let ds = crate::dataset::parse_dataset(yaml, std::path::Path::new("data.yml")).unwrap();
    let out = String::from_utf8(render_list(&ds.users, OutputFormat::Yaml)).unwrap();
    assert!(out.contains("plan: platinum"));
    let json = render_list(&ds.users, OutputFormat::Json);
    let back: Vec<User> = serde_json::from_slice(&json).unwrap();
    assert_eq!(back, ds.users);
    let q = RecordQuery::new("").with_filter("plan", "platinum");
    assert!(filter_records(&back, &q).is_empty());
}

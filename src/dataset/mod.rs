mod fixtures;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::health::ServiceHealth;
use crate::model::{Activity, AuditEntry, Organization, OrganizationMember, Ticket, User};
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset file: {path}: {message}")]
    Parse { path: String, message: String },

    #[error("unsupported dataset format for {path}, expected .yml, .yaml or .json")]
    UnsupportedFormat { path: String },

    #[error("duplicate {entity} id '{id}' in dataset")]
    DuplicateId { entity: &'static str, id: String },
}

/// Every collection the console views read from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub organizations: Vec<Organization>,
    pub members: Vec<OrganizationMember>,
    pub tickets: Vec<Ticket>,
    pub audit_log: Vec<AuditEntry>,
    pub services: Vec<ServiceHealth>,
    pub activity: Vec<Activity>,
    pub settings: Settings,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserDetail {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrganizationDetail {
    pub organization: Organization,
    pub members: Vec<OrganizationMember>,
    pub users: Vec<User>,
}

enum DataFormat {
    Yaml,
    Json,
}

fn format_for(path: &Path) -> Option<DataFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "yml" | "yaml" => Some(DataFormat::Yaml),
        "json" => Some(DataFormat::Json),
        _ => None,
    }
}

fn ensure_unique_ids<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl Dataset {
    /// The console's compiled-in collections.
    pub fn builtin() -> Self {
        Self {
            users: fixtures::users(),
            organizations: fixtures::organizations(),
            members: fixtures::members(),
            tickets: fixtures::tickets(),
            audit_log: fixtures::audit_log(),
            services: fixtures::services(),
            activity: fixtures::activity(),
            settings: Settings::builtin(),
        }
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        ensure_unique_ids("user", self.users.iter().map(|u| u.id.as_str()))?;
        ensure_unique_ids(
            "organization",
            self.organizations.iter().map(|o| o.id.as_str()),
        )?;
        ensure_unique_ids("member", self.members.iter().map(|m| m.id.as_str()))?;
        ensure_unique_ids("ticket", self.tickets.iter().map(|t| t.id.as_str()))?;
        ensure_unique_ids("audit", self.audit_log.iter().map(|e| e.id.as_str()))?;
        ensure_unique_ids("activity", self.activity.iter().map(|a| a.id.as_str()))?;
        ensure_unique_ids(
            "feature flag",
            self.settings.feature_flags.iter().map(|f| f.id.as_str()),
        )?;
        Ok(())
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_organization(&self, id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.id == id)
    }

    pub fn organization_named(&self, name: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.name == name)
    }

    pub fn members_of(&self, organization_id: &str) -> Vec<&OrganizationMember> {
        self.members
            .iter()
            .filter(|m| m.organization_id == organization_id)
            .collect()
    }

    pub fn users_in(&self, organization_name: &str) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.organization.as_deref() == Some(organization_name))
            .collect()
    }

    pub fn user_detail(&self, id: &str) -> Option<UserDetail> {
        let user = self.find_user(id)?;
        let organization = user
            .organization
            .as_deref()
            .and_then(|name| self.organization_named(name))
            .cloned();
        Some(UserDetail {
            user: user.clone(),
            organization,
        })
    }

    pub fn organization_detail(&self, id: &str) -> Option<OrganizationDetail> {
        let organization = self.find_organization(id)?;
        Some(OrganizationDetail {
            members: self.members_of(&organization.id).into_iter().cloned().collect(),
            users: self.users_in(&organization.name).into_iter().cloned().collect(),
            organization: organization.clone(),
        })
    }
}

pub fn parse_dataset(contents: &str, path: &Path) -> Result<Dataset, DatasetError> {
    let display = path.display().to_string();
    let dataset = match format_for(path) {
        Some(DataFormat::Yaml) => {
            serde_yaml::from_str::<Dataset>(contents).map_err(|e| DatasetError::Parse {
                path: display.clone(),
                message: e.to_string(),
            })?
        }
        Some(DataFormat::Json) => {
            serde_json::from_str::<Dataset>(contents).map_err(|e| DatasetError::Parse {
                path: display.clone(),
                message: e.to_string(),
            })?
        }
        None => return Err(DatasetError::UnsupportedFormat { path: display }),
    };
    dataset.validate()?;
    Ok(dataset)
}

pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    if format_for(path).is_none() {
        return Err(DatasetError::UnsupportedFormat {
            path: path.display().to_string(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| DatasetError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let dataset = parse_dataset(&contents, path)?;
    tracing::info!(
        path = %path.display(),
        users = dataset.users.len(),
        organizations = dataset.organizations.len(),
        tickets = dataset.tickets.len(),
        audit = dataset.audit_log.len(),
        activity = dataset.activity.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::model::{UserPlan, UserStatus};

    #[test]
    fn builtin_matches_console_fixtures() {
        let ds = Dataset::builtin();
        assert_eq!(ds.users.len(), 5);
        assert_eq!(ds.organizations.len(), 4);
        assert_eq!(ds.members.len(), 4);
        assert_eq!(ds.tickets.len(), 5);
        assert_eq!(ds.audit_log.len(), 5);
        assert_eq!(ds.services.len(), 6);
        assert_eq!(ds.activity.len(), 6);
        assert_eq!(ds.settings.feature_flags.len(), 4);
        assert!(ds.validate().is_ok());
    }

    #[test]
    fn user_detail_joins_organization_by_name() {
        let ds = Dataset::builtin();
        let detail = ds.user_detail("1").unwrap();
        assert_eq!(detail.user.name, "John Smith");
        assert_eq!(detail.organization.map(|o| o.id), Some("1".to_string()));

        let detail = ds.user_detail("2").unwrap();
        assert!(detail.organization.is_none());
        assert!(ds.user_detail("99").is_none());
    }

    #[test]
    fn organization_detail_collects_members_and_users() {
        let ds = Dataset::builtin();
        let detail = ds.organization_detail("1").unwrap();
        assert_eq!(detail.organization.mrr, Some(2350));
        assert_eq!(detail.members.len(), 4);
        assert_eq!(detail.users.len(), 1);
        assert_eq!(detail.users[0].email, "john@company.com");

        let detail = ds.organization_detail("3").unwrap();
        assert!(detail.members.is_empty());
        assert!(detail.users.is_empty());
    }

    #[test]
    fn yaml_dataset_with_unknown_enum_value_loads() {
        let yaml = r#"
users:
  - id: "a"
    email: ann@example.com
    name: Ann
    plan: platinum
    status: active
    created_at: "2024-05-01"
"#;
        let ds = parse_dataset(yaml, Path::new("data.yml")).unwrap();
        assert_eq!(ds.users[0].plan, UserPlan::Unrecognized("platinum".to_string()));
        assert_eq!(ds.users[0].status, UserStatus::Active);
        assert!(ds.tickets.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{"tickets": [
            {"id": "T1", "subject": "a", "submitter_email": "a@x", "status": "open", "priority": "low", "created_at": "now"},
            {"id": "T1", "subject": "b", "submitter_email": "b@x", "status": "open", "priority": "low", "created_at": "now"}
        ]}"#;
        let err = parse_dataset(json, Path::new("data.json")).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId { entity: "ticket", .. }));
    }

    #[test]
    fn duplicate_feature_flags_are_rejected() {
        let yaml = r#"
settings:
  feature_flags:
    - { id: api_v2, name: API v2, description: beta, enabled: true }
    - { id: api_v2, name: API v2 again, description: beta, enabled: false }
"#;
        let err = parse_dataset(yaml, Path::new("data.yaml")).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId { entity: "feature flag", .. }));
    }

    #[test]
    fn activity_type_key_loads() {
        let json = r#"{"activity": [
            {"id": "1", "type": "login", "message": "m", "actor": "system", "timestamp": "now"}
        ]}"#;
        let ds = parse_dataset(json, Path::new("data.json")).unwrap();
        assert_eq!(ds.activity[0].kind, crate::model::ActivityKind::Login);
        assert_eq!(ds.settings, Settings::default());
    }

    #[test]
    fn load_dataset_reads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let body = serde_json::to_string(&Dataset::builtin()).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        let ds = load_dataset(file.path()).unwrap();
        assert_eq!(ds, Dataset::builtin());
    }

    #[test]
    fn load_dataset_rejects_unknown_extension() {
        let err = load_dataset(Path::new("data.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedFormat { .. }));
    }

    #[test]
    fn load_dataset_reports_missing_file() {
        let err = load_dataset(Path::new("/nonexistent/mxadmin/data.yml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read dataset file"));
    }
}

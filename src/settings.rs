use serde::{Deserialize, Serialize};

use crate::health::{ServiceHealth, ServiceStatus};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlag {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimits {
    /// Per user.
    pub analysis_per_minute: u32,
    /// Per API key.
    pub api_requests_per_hour: u32,
    /// Per client IP.
    pub login_attempts_per_hour: u32,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            analysis_per_minute: 100,
            api_requests_per_hour: 1000,
            login_attempts_per_hour: 10,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintenance {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_page_url: Option<String>,
}

/// Global platform settings: feature flags, rate limits, maintenance mode and
/// the per-endpoint API status shown next to them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub feature_flags: Vec<FeatureFlag>,
    pub rate_limits: RateLimits,
    pub maintenance: Maintenance,
    pub api_status: Vec<ServiceHealth>,
}

impl Settings {
    pub fn builtin() -> Self {
        let flags = [
            (
                "advanced_analytics",
                "Advanced Analytics",
                "Enable detailed email analysis insights and reports",
                true,
            ),
            (
                "ai_threat_detection",
                "AI Threat Detection",
                "Use machine learning for enhanced threat detection",
                true,
            ),
            (
                "bulk_import",
                "Bulk Import",
                "Allow organizations to bulk import team members",
                false,
            ),
            (
                "api_v2",
                "API v2 Beta",
                "Enable access to the new API version",
                false,
            ),
        ];
        let endpoints = [
            ("Analysis API", ServiceStatus::Healthy, "45ms"),
            ("Auth API", ServiceStatus::Healthy, "23ms"),
            ("Billing API", ServiceStatus::Healthy, "67ms"),
            ("Webhooks", ServiceStatus::Degraded, "234ms"),
        ];
        Self {
            feature_flags: flags
                .into_iter()
                .map(|(id, name, description, enabled)| FeatureFlag {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: description.to_string(),
                    enabled,
                })
                .collect(),
            rate_limits: RateLimits::default(),
            maintenance: Maintenance {
                enabled: false,
                status_page_url: Some("https://status.mxlens.com".to_string()),
            },
            api_status: endpoints
                .into_iter()
                .map(|(name, status, latency)| ServiceHealth {
                    name: name.to_string(),
                    status,
                    latency: Some(latency.to_string()),
                })
                .collect(),
        }
    }

    pub fn flag(&self, id: &str) -> Option<&FeatureFlag> {
        self.feature_flags.iter().find(|f| f.id == id)
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.flag(id).is_some_and(|f| f.enabled)
    }

    pub fn enabled_flags(&self) -> impl Iterator<Item = &FeatureFlag> {
        self.feature_flags.iter().filter(|f| f.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_flags_and_limits() {
        let settings = Settings::builtin();
        assert_eq!(settings.feature_flags.len(), 4);
        let enabled: Vec<_> = settings.enabled_flags().map(|f| f.id.as_str()).collect();
        assert_eq!(enabled, vec!["advanced_analytics", "ai_threat_detection"]);
        assert_eq!(settings.rate_limits.api_requests_per_hour, 1000);
        assert!(!settings.maintenance.enabled);
    }

    #[test]
    fn unknown_flag_is_disabled() {
        let settings = Settings::builtin();
        assert!(settings.is_enabled("advanced_analytics"));
        assert!(!settings.is_enabled("bulk_import"));
        assert!(!settings.is_enabled("dark_mode"));
        assert!(settings.flag("dark_mode").is_none());
    }

    #[test]
    fn partial_yaml_keeps_default_limits() {
        let yaml = "rate_limits:\n  login_attempts_per_hour: 3\nmaintenance:\n  enabled: true\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.rate_limits.login_attempts_per_hour, 3);
        assert_eq!(settings.rate_limits.analysis_per_minute, 100);
        assert!(settings.maintenance.enabled);
        assert!(settings.feature_flags.is_empty());
    }
}

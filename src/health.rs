use serde::{Deserialize, Serialize};

use crate::model::categorical;

categorical!(ServiceStatus {
    Healthy => "healthy",
    Degraded => "degraded",
    Down => "down",
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub name: String,
    pub status: ServiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatus {
    Operational,
    PartialOutage,
    MajorOutage,
}

impl SystemStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Operational => "All Systems Operational",
            Self::PartialOutage => "Partial Outage",
            Self::MajorOutage => "Major Outage",
        }
    }
}

/// Collapses per-service health into the banner state. A degraded service
/// outranks a down one, so a mix of the two still reads as a partial outage.
pub fn rollup(services: &[ServiceHealth]) -> SystemStatus {
    if services.iter().all(|s| s.status == ServiceStatus::Healthy) {
        SystemStatus::Operational
    } else if services.iter().any(|s| s.status == ServiceStatus::Degraded) {
        SystemStatus::PartialOutage
    } else {
        SystemStatus::MajorOutage
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: SystemStatus,
    pub services: Vec<ServiceHealth>,
}

impl HealthReport {
    pub fn from_services(services: &[ServiceHealth]) -> Self {
        Self {
            status: rollup(services),
            services: services.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svc(name: &str, status: ServiceStatus) -> ServiceHealth {
        ServiceHealth {
            name: name.to_string(),
            status,
            latency: None,
        }
    }

    #[test]
    fn all_healthy_is_operational() {
        let services = vec![
            svc("api", ServiceStatus::Healthy),
            svc("db", ServiceStatus::Healthy),
        ];
        assert_eq!(rollup(&services), SystemStatus::Operational);
        assert_eq!(rollup(&[]), SystemStatus::Operational);
    }

    #[test]
    fn degraded_wins_over_down() {
        let services = vec![
            svc("api", ServiceStatus::Down),
            svc("mail", ServiceStatus::Degraded),
        ];
        assert_eq!(rollup(&services), SystemStatus::PartialOutage);
    }

    #[test]
    fn down_without_degraded_is_major() {
        let services = vec![
            svc("api", ServiceStatus::Healthy),
            svc("db", ServiceStatus::Down),
        ];
        assert_eq!(rollup(&services), SystemStatus::MajorOutage);
        let services = vec![svc("cdn", ServiceStatus::parse("maintenance"))];
        assert_eq!(rollup(&services).label(), "Major Outage");
    }

    #[test]
    fn builtin_services_report_partial_outage() {
        let ds = crate::dataset::Dataset::builtin();
        assert_eq!(rollup(&ds.services), SystemStatus::PartialOutage);
    }
}

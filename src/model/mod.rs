/// Declares a closed set of wire values for an enumerated record field.
///
/// Every generated enum carries an extra `Unrecognized` variant that keeps
/// values outside the set verbatim, so a dataset file loads and exports
/// unchanged. It has no declared string form and never compares equal to a
/// filter selection.
macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:tt),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Unrecognized(String),
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($label),+];

            pub fn as_str(&self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some($label),)+
                    Self::Unrecognized(_) => None,
                }
            }

            /// The value as it appears on the wire, recognized or not.
            pub fn raw(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn parse(value: &str) -> Self {
                match value {
                    $($label => Self::$variant,)+
                    other => Self::Unrecognized(other.to_string()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.raw())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.raw())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::parse(&raw))
            }
        }
    };
}

pub(crate) use categorical;

pub mod activity;
pub mod audit;
pub mod organization;
pub mod ticket;
pub mod user;

pub use activity::{Activity, ActivityKind};
pub use audit::{ActionType, AuditEntry, AuditOutcome};
pub use organization::{MemberRole, Organization, OrganizationMember, OrganizationPlan};
pub use ticket::{Ticket, TicketPriority, TicketStatus};
pub use user::{User, UserPlan, UserStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(UserPlan::parse("pro"), UserPlan::Pro);
        assert_eq!(UserPlan::parse("Pro"), UserPlan::Unrecognized("Pro".to_string()));
        assert_eq!(TicketStatus::parse("in_progress"), TicketStatus::InProgress);
    }

    #[test]
    fn unrecognized_has_no_declared_value() {
        let status = UserStatus::Unrecognized("banned".to_string());
        assert_eq!(status.as_str(), None);
        assert_eq!(status.raw(), "banned");
        assert_eq!(status.to_string(), "banned");
        assert!(!UserStatus::VALUES.contains(&"banned"));
    }

    #[test]
    fn unknown_values_deserialize_to_unrecognized() {
        let plan: OrganizationPlan = serde_json::from_str("\"free\"").unwrap();
        assert_eq!(plan, OrganizationPlan::Unrecognized("free".to_string()));
        let kind: ActionType = serde_yaml::from_str("security").unwrap();
        assert_eq!(kind, ActionType::Security);
    }

    #[test]
    fn unrecognized_values_serialize_verbatim() {
        let plans = vec![UserPlan::Business, UserPlan::parse("platinum")];
        let json = serde_json::to_string(&plans).unwrap();
        assert_eq!(json, r#"["business","platinum"]"#);
        let back: Vec<UserPlan> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plans);
    }
}

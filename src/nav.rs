use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SuperAdmin,
    Staff,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "superadmin" => Some(Self::SuperAdmin),
            "staff" => Some(Self::Staff),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super-admin",
            Self::Staff => "staff",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    /// Empty means every role sees the entry.
    pub roles: &'static [Role],
}

impl NavItem {
    pub fn visible_to(&self, role: Role) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        href: "/",
        roles: &[],
    },
    NavItem {
        label: "Users",
        href: "/users",
        roles: &[],
    },
    NavItem {
        label: "Organizations",
        href: "/organizations",
        roles: &[],
    },
    NavItem {
        label: "Support",
        href: "/support",
        roles: &[],
    },
    NavItem {
        label: "Audit Log",
        href: "/audit",
        roles: &[Role::SuperAdmin],
    },
    NavItem {
        label: "Settings",
        href: "/settings",
        roles: &[Role::SuperAdmin],
    },
];

pub fn visible_items(role: Role) -> Vec<&'static NavItem> {
    NAV_ITEMS.iter().filter(|item| item.visible_to(role)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_admin_sees_everything() {
        assert_eq!(visible_items(Role::SuperAdmin).len(), NAV_ITEMS.len());
    }

    #[test]
    fn staff_loses_restricted_entries() {
        let labels: Vec<_> = visible_items(Role::Staff).iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Users", "Organizations", "Support"]);
    }

    #[test]
    fn roles_serialize_in_cli_spelling() {
        let json = serde_json::to_string(&NAV_ITEMS[4]).unwrap();
        assert!(json.contains(r#""roles":["super-admin"]"#));
        assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), r#""staff""#);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(Role::parse("SuperAdmin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("super-admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("super_admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("Staff"), Some(Role::Staff));
        assert_eq!(Role::parse("root"), None);
    }
}

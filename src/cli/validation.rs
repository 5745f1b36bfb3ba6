use crate::cli::args::{CliArgs, Command};
use crate::filter::{Filterable, ALL};
use crate::model::{Activity, AuditEntry, Organization, Ticket, User};
use crate::nav::Role;
use crate::output::OutputFormat;

fn check_selection<T: Filterable>(flag: &str, name: &str, value: &str) -> Result<(), String> {
    if value == ALL {
        return Ok(());
    }
    let schema = T::schema();
    let field = schema.category(name).ok_or_else(|| {
        format!(
            "invalid --{flag}, {} records cannot be filtered by {name}",
            schema.entity
        )
    })?;
    if field.values.iter().any(|v| *v == value) {
        return Ok(());
    }
    Err(format!(
        "invalid --{flag} '{value}', expected one of: {ALL}, {}",
        field.values.join(", ")
    ))
}

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected one of: {}",
                OutputFormat::NAMES.join(", ")
            ));
        }
    }
    match &args.command {
        Command::Users(f) => {
            check_selection::<User>("plan", "plan", &f.plan)?;
            check_selection::<User>("status", "status", &f.status)?;
        }
        Command::Orgs(f) => {
            check_selection::<Organization>("plan", "plan", &f.plan)?;
        }
        Command::Tickets(f) => {
            check_selection::<Ticket>("status", "status", &f.status)?;
            check_selection::<Ticket>("priority", "priority", &f.priority)?;
        }
        Command::Audit(f) => {
            check_selection::<AuditEntry>("action", "action", &f.action)?;
            check_selection::<AuditEntry>("status", "status", &f.status)?;
        }
        Command::Activity(f) => {
            check_selection::<Activity>("type", "type", &f.kind)?;
        }
        Command::Settings { flag: Some(id) } => {
            if id.trim().is_empty() {
                let message = "invalid --flag, expected a non-empty feature flag id";
                return Err(message.to_string());
            }
        }
        Command::Nav { role: Some(raw) } => {
            if Role::parse(raw).is_none() {
                return Err(format!(
                    "invalid --role '{raw}', expected super-admin or staff"
                ));
            }
        }
        Command::User { id } | Command::Org { id } => {
            if id.trim().is_empty() {
                return Err("invalid id, expected a non-empty record id".to_string());
            }
        }
        Command::Nav { role: None }
        | Command::Settings { flag: None }
        | Command::Health
        | Command::Dashboard
        | Command::InitConfig => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(argv)
    }

    #[test]
    fn known_values_pass() {
        let args = parse(&["mxadmin", "users", "--plan", "pro", "--status", "all"]);
        assert!(validate(&args).is_ok());
        assert!(validate(&parse(&["mxadmin", "tickets", "--status", "in_progress"])).is_ok());
        assert!(validate(&parse(&["mxadmin", "audit", "--action", "alert"])).is_ok());
    }

    #[test]
    fn unknown_selector_value_lists_choices() {
        let err = validate(&parse(&["mxadmin", "users", "--plan", "gold"])).unwrap_err();
        assert_eq!(
            err,
            "invalid --plan 'gold', expected one of: all, free, pro, business, enterprise"
        );
    }

    #[test]
    fn free_is_not_an_organization_plan() {
        assert!(validate(&parse(&["mxadmin", "orgs", "--plan", "free"])).is_err());
    }

    #[test]
    fn activity_type_is_checked() {
        let args = parse(&["mxadmin", "activity", "--type", "password_reset"]);
        assert!(validate(&args).is_ok());
        let err = validate(&parse(&["mxadmin", "activity", "--type", "logout"])).unwrap_err();
        assert!(err.starts_with("invalid --type 'logout', expected one of: all, user_created"));
        assert!(validate(&parse(&["mxadmin", "settings", "--flag", " "])).is_err());
    }

    #[test]
    fn selector_values_are_case_sensitive() {
        assert!(validate(&parse(&["mxadmin", "users", "--status", "Active"])).is_err());
    }

    #[test]
    fn output_format_and_role_are_checked() {
        assert!(validate(&parse(&["mxadmin", "-A", "xml", "health"])).is_err());
        assert!(validate(&parse(&["mxadmin", "nav", "--role", "root"])).is_err());
        assert!(validate(&parse(&["mxadmin", "nav", "--role", "staff"])).is_ok());
    }
}

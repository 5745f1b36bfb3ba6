use clap::{ArgAction, Args, Parser, Subcommand};

use crate::filter::RecordQuery;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "mxadmin",
    version,
    about = "MXLens admin console records from the command line",
    long_about = "mxadmin searches and filters the admin console's users, organizations, \
support tickets, audit log and activity feed.\n\n\
Examples:\n  \
mxadmin users --search john\n  \
mxadmin users --plan pro --status active -A json\n  \
mxadmin tickets -s billing\n  \
mxadmin audit --action security --data ./fixtures.yml\n  \
mxadmin settings --flag api_v2\n\n\
Tip: Use --config to persist the data file and output settings."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv, -vvv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'n',
        long = "no-color",
        global = true,
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        global = true,
        help_heading = "Output",
        help = "Write results to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "output-format",
        visible_alias = "format",
        value_name = "FORMAT",
        global = true,
        help_heading = "Output",
        help = "Output format (text, json, yaml)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "FILE",
        global = true,
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.mxadmin/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 'd',
        long = "data",
        visible_alias = "data-file",
        value_name = "FILE",
        global = true,
        help_heading = "Input",
        help = "Load records from a YAML or JSON dataset instead of the built-in data."
    )]
    pub data_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List user accounts.
    Users(UserFilterArgs),
    /// List organizations.
    #[command(visible_alias = "organizations")]
    Orgs(OrganizationFilterArgs),
    /// List support tickets.
    #[command(visible_alias = "support")]
    Tickets(TicketFilterArgs),
    /// List audit log entries.
    #[command(visible_alias = "audit-log")]
    Audit(AuditFilterArgs),
    /// Show one user and their organization.
    User {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Show one organization with its members and users.
    #[command(visible_alias = "organization")]
    Org {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// List recent admin activity.
    #[command(visible_alias = "activity-feed")]
    Activity(ActivityFilterArgs),
    /// Show service health.
    Health,
    /// Show summary counters.
    Dashboard,
    /// List navigation entries visible to a role.
    Nav {
        #[arg(
            short = 'r',
            long = "role",
            value_name = "ROLE",
            help = "Role to resolve entries for (super-admin, staff)."
        )]
        role: Option<String>,
    },
    /// Show platform settings, or a single feature flag.
    Settings {
        #[arg(
            short = 'f',
            long = "flag",
            value_name = "ID",
            help = "Only show the feature flag with this id."
        )]
        flag: Option<String>,
    },
    /// Write the default config file if it does not exist.
    InitConfig,
}

#[derive(Args, Debug, Clone)]
pub struct UserFilterArgs {
    #[arg(
        short = 's',
        long = "search",
        value_name = "TEXT",
        default_value = "",
        help = "Case-insensitive text matched against email and name."
    )]
    pub search: String,

    #[arg(
        long = "plan",
        value_name = "PLAN",
        default_value = "all",
        help = "free, pro, business, enterprise or all."
    )]
    pub plan: String,

    #[arg(
        long = "status",
        value_name = "STATUS",
        default_value = "all",
        help = "active, suspended, pending or all."
    )]
    pub status: String,
}

#[derive(Args, Debug, Clone)]
pub struct OrganizationFilterArgs {
    #[arg(
        short = 's',
        long = "search",
        value_name = "TEXT",
        default_value = "",
        help = "Case-insensitive text matched against name and owner email."
    )]
    pub search: String,

    #[arg(
        long = "plan",
        value_name = "PLAN",
        default_value = "all",
        help = "pro, business, enterprise or all."
    )]
    pub plan: String,
}

#[derive(Args, Debug, Clone)]
pub struct TicketFilterArgs {
    #[arg(
        short = 's',
        long = "search",
        value_name = "TEXT",
        default_value = "",
        help = "Case-insensitive text matched against subject and submitter email."
    )]
    pub search: String,

    #[arg(
        long = "status",
        value_name = "STATUS",
        default_value = "all",
        help = "open, in_progress, closed or all."
    )]
    pub status: String,

    #[arg(
        long = "priority",
        value_name = "PRIORITY",
        default_value = "all",
        help = "low, medium, high, urgent or all."
    )]
    pub priority: String,
}

#[derive(Args, Debug, Clone)]
pub struct AuditFilterArgs {
    #[arg(
        short = 's',
        long = "search",
        value_name = "TEXT",
        default_value = "",
        help = "Case-insensitive text matched against actor email, action and resource."
    )]
    pub search: String,

    #[arg(
        long = "action",
        visible_alias = "action-type",
        value_name = "TYPE",
        default_value = "all",
        help = "user, security, settings, auth, alert or all."
    )]
    pub action: String,

    #[arg(
        long = "status",
        value_name = "STATUS",
        default_value = "all",
        help = "success, failed, pending or all."
    )]
    pub status: String,
}

#[derive(Args, Debug, Clone)]
pub struct ActivityFilterArgs {
    #[arg(
        short = 's',
        long = "search",
        value_name = "TEXT",
        default_value = "",
        help = "Case-insensitive text matched against message and actor."
    )]
    pub search: String,

    #[arg(
        long = "type",
        value_name = "TYPE",
        default_value = "all",
        help = "user_created, security, alert, settings, login, password_reset or all."
    )]
    pub kind: String,
}

impl UserFilterArgs {
    pub fn to_query(&self) -> RecordQuery {
        RecordQuery::new(self.search.as_str())
            .with_filter("plan", &self.plan)
            .with_filter("status", &self.status)
    }
}

impl OrganizationFilterArgs {
    pub fn to_query(&self) -> RecordQuery {
        RecordQuery::new(self.search.as_str()).with_filter("plan", &self.plan)
    }
}

impl TicketFilterArgs {
    pub fn to_query(&self) -> RecordQuery {
        RecordQuery::new(self.search.as_str())
            .with_filter("status", &self.status)
            .with_filter("priority", &self.priority)
    }
}

impl AuditFilterArgs {
    pub fn to_query(&self) -> RecordQuery {
        RecordQuery::new(self.search.as_str())
            .with_filter("action", &self.action)
            .with_filter("status", &self.status)
    }
}

impl ActivityFilterArgs {
    pub fn to_query(&self) -> RecordQuery {
        RecordQuery::new(self.search.as_str()).with_filter("type", &self.kind)
    }
}

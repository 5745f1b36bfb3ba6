use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use serde::Serialize;

use crate::cli::args::{CliArgs, Command};
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::dashboard::DashboardSummary;
use crate::dataset::{self, Dataset};
use crate::filter::{filter_records, Filterable, RecordQuery};
use crate::health::HealthReport;
use crate::logging;
use crate::nav::{self, NavItem, Role};
use crate::output::{self, OutputFormat, TextRender};

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

#[derive(Clone, Debug)]
struct RunConfig {
    command: Command,
    config_path: Option<PathBuf>,
    data_file: Option<PathBuf>,
    output: Option<PathBuf>,
    format: OutputFormat,
    no_color: bool,
    verbose: u8,
    role: Role,
}

fn build_run_config(
    args: CliArgs,
    cfg: ConfigFile,
    config_path: Option<PathBuf>,
) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = args.no_color || cfg.no_color.unwrap_or(false);
    let verbose = if args.verbose > 0 {
        args.verbose
    } else {
        cfg.verbose.unwrap_or(0)
    };

    let output = args.output.or(cfg.output);
    let format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| {
            format!(
                "invalid output_format '{raw}', expected one of: {}",
                OutputFormat::NAMES.join(", ")
            )
        })?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    let cli_role = match &args.command {
        Command::Nav { role } => role.clone(),
        _ => None,
    };
    let role = match cli_role.or(cfg.role) {
        Some(raw) => Role::parse(&raw)
            .ok_or_else(|| format!("invalid role '{raw}', expected super-admin or staff"))?,
        None => Role::SuperAdmin,
    };

    Ok(RunConfig {
        command: args.command,
        config_path,
        data_file: args
            .data_file
            .or(cfg.data_file)
            .map(|p| config::expand_tilde(&p)),
        output: output.map(|p| config::expand_tilde(&p)),
        format,
        no_color,
        verbose,
        role,
    })
}

struct Outcome {
    body: Vec<u8>,
    summary: Option<String>,
}

fn list<T>(records: &[T], query: &RecordQuery, format: OutputFormat, label: &str) -> Outcome
where
    T: Filterable + Clone + Serialize + TextRender,
{
    let matched = filter_records(records, query);
    Outcome {
        body: output::render_list(&matched, format),
        summary: Some(format!("{} of {} {label}", matched.len(), records.len())),
    }
}

fn single<T: Serialize + TextRender>(item: &T, format: OutputFormat) -> Outcome {
    Outcome {
        body: output::render_one(item, format),
        summary: None,
    }
}

fn execute(run: &RunConfig, ds: &Dataset) -> Result<Outcome, String> {
    let format = run.format;
    let outcome = match &run.command {
        Command::Users(f) => list(&ds.users, &f.to_query(), format, "users"),
        Command::Orgs(f) => list(&ds.organizations, &f.to_query(), format, "organizations"),
        Command::Tickets(f) => list(&ds.tickets, &f.to_query(), format, "tickets"),
        Command::Audit(f) => list(&ds.audit_log, &f.to_query(), format, "audit entries"),
        Command::Activity(f) => list(&ds.activity, &f.to_query(), format, "activity events"),
        Command::User { id } => {
            let detail = ds
                .user_detail(id)
                .ok_or_else(|| format!("user '{id}' not found"))?;
            single(&detail, format)
        }
        Command::Org { id } => {
            let detail = ds
                .organization_detail(id)
                .ok_or_else(|| format!("organization '{id}' not found"))?;
            single(&detail, format)
        }
        Command::Settings { flag: Some(id) } => {
            let flag = ds
                .settings
                .flag(id)
                .ok_or_else(|| format!("feature flag '{id}' not found"))?;
            single(flag, format)
        }
        Command::Settings { flag: None } => single(&ds.settings, format),
        Command::Health => single(&HealthReport::from_services(&ds.services), format),
        Command::Dashboard => single(&DashboardSummary::from_dataset(ds), format),
        Command::Nav { .. } => {
            let items: Vec<NavItem> = nav::visible_items(run.role).into_iter().cloned().collect();
            Outcome {
                body: output::render_list(&items, format),
                summary: None,
            }
        }
        Command::InitConfig => {
            return Err("init-config does not read records".to_string());
        }
    };
    Ok(outcome)
}

fn load_records(run: &RunConfig) -> Result<Dataset, String> {
    match run.data_file.as_deref() {
        Some(path) => dataset::load_dataset(path).map_err(|e| e.to_string()),
        None => {
            tracing::debug!("using built-in dataset");
            Ok(Dataset::builtin())
        }
    }
}

fn write_outcome(run: &RunConfig, outcome: &Outcome) -> Result<(), String> {
    match run.output.as_deref() {
        Some(path) => {
            std::fs::write(path, &outcome.body)
                .map_err(|e| format!("failed to write output '{}': {e}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = outcome.body.len(), "wrote output");
            if let Some(summary) = outcome.summary.as_deref() {
                format_kv_line("Matched", summary);
            }
            format_kv_line("Output", &path.display().to_string());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&outcome.body)
                .map_err(|e| format!("failed to write to stdout: {e}"))?;
            // Keep machine-readable stdout clean.
            if run.format == OutputFormat::Text {
                if let Some(summary) = outcome.summary.as_deref() {
                    writeln!(stdout, "{}", format!(":: Matched :: {summary}").dimmed())
                        .map_err(|e| format!("failed to write to stdout: {e}"))?;
                }
            }
        }
    }
    Ok(())
}

fn init_config(path: Option<&Path>) -> Result<(), String> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config::default_config_path()
            .ok_or_else(|| "unable to determine home directory for config".to_string())?,
    };
    if config::ensure_default_config_file(&path)? {
        format_kv_line("Created", &path.display().to_string());
    } else {
        format_kv_line("Exists", &path.display().to_string());
    }
    Ok(())
}

fn run_with(run: RunConfig) -> Result<(), String> {
    logging::init_logging(run.verbose, run.no_color);
    if run.no_color || run.output.is_some() {
        colored::control::set_override(false);
    }
    tracing::info!(
        config = ?run.config_path,
        data = ?run.data_file,
        format = ?run.format,
        "starting"
    );

    if matches!(run.command, Command::InitConfig) {
        return init_config(run.config_path.as_deref());
    }

    let ds = load_records(&run)?;
    let outcome = execute(&run, &ds)?;
    write_outcome(&run, &outcome)
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let explicit_config = args.config.as_deref().map(config::expand_tilde);
    let (cfg, config_path) = match explicit_config {
        Some(path) => (config::load_config(&path, false)?, Some(path)),
        None => match config::default_config_path() {
            Some(path) => (config::load_config(&path, true)?, Some(path)),
            None => (ConfigFile::default(), None),
        },
    };

    run_with(build_run_config(args, cfg, config_path)?)
}

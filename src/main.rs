use std::process::exit;

use colored::Colorize;

fn main() {
    if let Err(e) = mxadmin::app::run_cli() {
        eprintln!("{} {}", "error:".bold().red(), e.trim_start_matches("error: "));
        exit(1);
    }
}

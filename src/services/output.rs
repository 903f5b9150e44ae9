use crate::domain::models::{JsonOut, RunReport};
use colored::Colorize;

/// Per-file diagnostic, on stderr like every other human-facing line so
/// stdout stays reserved for the `--json` report.
pub fn report_file(path: &str, labels: &[&'static str], fixing: bool) {
    let joined = labels
        .iter()
        .map(|label| label.red().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if fixing {
        eprintln!("Fixing {} for {}.", path.magenta().bold(), joined);
    } else {
        eprintln!("File {} has {}.", path.magenta().bold(), joined);
    }
}

/// The exact command that would fix the listed files.
pub fn fix_command(files: &[String]) -> String {
    let mut cmd = String::from("wspurge fix");
    for file in files {
        cmd.push(' ');
        cmd.push_str(file);
    }
    cmd
}

pub fn suggest_fix_command(files: &[String]) {
    eprintln!(
        "{} Please run `{}` to fix them.",
        "Whitespace validation errors.".red().bold(),
        fix_command(files)
    );
}

pub fn commit_notice() {
    eprintln!(
        "Files written to working directory. {}",
        "Please commit them before pushing.".magenta().bold()
    );
}

pub fn emit_json(ok: bool, report: &RunReport) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data: report })?
    );
    Ok(())
}

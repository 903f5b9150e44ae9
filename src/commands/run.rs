use crate::domain::models::{FileReport, Outcome, RunReport};
use crate::services::output;
use crate::services::rules::Rule;
use crate::services::validator;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Check mode. Never writes unless `auto_fix` escalates to the fixer; in
/// that case a fully-resolved run counts as success.
pub fn handle_validate(
    rules: &[Rule],
    files: &[PathBuf],
    auto_fix: bool,
    json: bool,
) -> anyhow::Result<Outcome> {
    let mut reports = Vec::new();
    let mut dirty = Vec::new();
    for path in files {
        let check = validator::check_file(rules, path)?;
        if check.is_clean() {
            continue;
        }
        let name = path.display().to_string();
        output::report_file(&name, &check.violations, false);
        reports.push(FileReport {
            path: name,
            violations: check.violations,
            fixed: false,
        });
        dirty.push(path.clone());
    }

    let outcome = if dirty.is_empty() {
        Outcome::Clean
    } else if auto_fix {
        escalate_to_fix(rules, &dirty, &mut reports)?
    } else {
        let names: Vec<String> = reports.iter().map(|r| r.path.clone()).collect();
        output::suggest_fix_command(&names);
        Outcome::Unresolved
    };

    if json {
        let report = RunReport {
            mode: "validate",
            checked: files.len(),
            files: reports,
            outcome: outcome.as_str(),
        };
        output::emit_json(outcome.exit_code() == 0, &report)?;
    }
    Ok(outcome)
}

/// Fix mode. Rewrites violating files in place and always exits non-zero
/// after writing: the changed working tree has to be committed deliberately.
pub fn handle_fix(rules: &[Rule], files: &[PathBuf], json: bool) -> anyhow::Result<Outcome> {
    let mut reports = Vec::new();
    for path in files {
        if let Some(report) = fix_file(rules, path)? {
            reports.push(report);
        }
    }

    let outcome = if reports.is_empty() {
        Outcome::Clean
    } else {
        output::commit_notice();
        Outcome::Written
    };

    if json {
        let report = RunReport {
            mode: "fix",
            checked: files.len(),
            files: reports,
            outcome: outcome.as_str(),
        };
        output::emit_json(outcome.exit_code() == 0, &report)?;
    }
    Ok(outcome)
}

/// Rewrites one file if it violates any rule. Clean files are left
/// untouched on disk, not rewritten with identical bytes.
fn fix_file(rules: &[Rule], path: &Path) -> anyhow::Result<Option<FileReport>> {
    let check = validator::check_file(rules, path)?;
    if check.is_clean() {
        return Ok(None);
    }
    let name = path.display().to_string();
    output::report_file(&name, &check.violations, true);
    fs::write(path, &check.fixed)
        .with_context(|| format!("could not write {}", path.display()))?;
    Ok(Some(FileReport {
        path: name,
        violations: check.violations,
        fixed: true,
    }))
}

/// The in-process stand-in for "re-run this tool in fix mode": rewrite the
/// violating files, then re-validate them. Anything still dirty afterwards
/// falls back to the manual-fix suggestion.
fn escalate_to_fix(
    rules: &[Rule],
    dirty: &[PathBuf],
    reports: &mut [FileReport],
) -> anyhow::Result<Outcome> {
    for path in dirty {
        fix_file(rules, path)?;
    }
    for path in dirty {
        if !validator::check_file(rules, path)?.is_clean() {
            let names: Vec<String> = reports.iter().map(|r| r.path.clone()).collect();
            output::suggest_fix_command(&names);
            return Ok(Outcome::Unresolved);
        }
    }
    for report in reports.iter_mut() {
        report.fixed = true;
    }
    Ok(Outcome::AutoFixed)
}

use anyhow::{bail, Context};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;

/// File classes worth whitespace-checking. Binary and generated formats are
/// deliberately absent.
pub const DEFAULT_WHITELIST: &[&str] = &[
    r"\.(c|cc|cpp|h|hpp|rs|go|java|kt|js|jsx|ts|tsx|py|rb|php|css|scss|sql|sh|tpl|vue|html|json|yml|yaml|toml|md|txt)$",
];

pub const DEFAULT_BLACKLIST: &[&str] = &[r"(^|/)(third_party|vendor|node_modules)/"];

/// Whitelist/blacklist matching over repo-relative path strings. A path is
/// kept iff some whitelist pattern matches it and no blacklist pattern does.
pub struct FileFilter {
    whitelist: Vec<Regex>,
    blacklist: Vec<Regex>,
}

impl FileFilter {
    /// Non-empty `only`/`skip` lists replace the corresponding default list
    /// wholesale rather than extending it.
    pub fn new(only: &[String], skip: &[String]) -> anyhow::Result<Self> {
        let whitelist = if only.is_empty() {
            compile_defaults(DEFAULT_WHITELIST)
        } else {
            compile(only)?
        };
        let blacklist = if skip.is_empty() {
            compile_defaults(DEFAULT_BLACKLIST)
        } else {
            compile(skip)?
        };
        Ok(FileFilter {
            whitelist,
            blacklist,
        })
    }

    pub fn keeps(&self, path: &str) -> bool {
        self.whitelist.iter().any(|re| re.is_match(path))
            && !self.blacklist.iter().any(|re| re.is_match(path))
    }
}

fn compile_defaults(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("default filter pattern must compile"))
        .collect()
}

fn compile(patterns: &[String]) -> anyhow::Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid filter pattern: {p}")))
        .collect()
}

/// Resolves the enclosing repository's working-tree root.
pub fn repo_root() -> anyhow::Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .context("could not run git")?;
    if !output.status.success() {
        bail!("not inside a git repository");
    }
    let root = String::from_utf8(output.stdout).context("repository root is not UTF-8")?;
    Ok(PathBuf::from(root.trim_end()))
}

/// Every tracked file, repo-relative.
pub fn tracked_files(root: &Path) -> anyhow::Result<Vec<String>> {
    git_paths(root, &["ls-files", "-z"])
}

/// Files changed against HEAD plus untracked (non-ignored) files — the set
/// a pre-commit run cares about.
pub fn changed_files(root: &Path) -> anyhow::Result<Vec<String>> {
    let mut files = git_paths(root, &["diff", "--name-only", "-z", "HEAD"])?;
    files.extend(git_paths(
        root,
        &["ls-files", "-z", "--others", "--exclude-standard"],
    )?);
    files.sort();
    files.dedup();
    Ok(files)
}

fn git_paths(root: &Path, args: &[&str]) -> anyhow::Result<Vec<String>> {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(args)
        .output()
        .context("could not run git")?;
    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }
    Ok(output
        .stdout
        .split(|&b| b == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect())
}

/// Builds the candidate list for one invocation.
///
/// Explicit paths bypass git discovery but still pass through the filter, so
/// a blacklisted path handed on the command line stays excluded. With no
/// paths, the candidate set comes from version-control state.
pub fn candidate_files(
    paths: &[PathBuf],
    all: bool,
    filter: &FileFilter,
) -> anyhow::Result<Vec<PathBuf>> {
    if !paths.is_empty() {
        let mut out = Vec::new();
        for path in paths {
            if !path.exists() {
                bail!("path does not exist: {}", path.display());
            }
            if filter.keeps(&path.to_string_lossy()) {
                out.push(path.clone());
            }
        }
        return Ok(out);
    }

    let root = repo_root()?;
    let names = if all {
        tracked_files(&root)?
    } else {
        changed_files(&root)?
    };
    Ok(names
        .into_iter()
        .filter(|name| filter.keeps(name))
        .map(|name| root.join(name))
        // A changed entry may be a deletion; nothing to scan there.
        .filter(|path| path.is_file())
        .collect())
}

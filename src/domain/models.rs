use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One scanned file that had at least one violation.
#[derive(Debug, Serialize, Clone)]
pub struct FileReport {
    pub path: String,
    /// Labels of the rules that matched, in catalog order.
    pub violations: Vec<&'static str>,
    /// Whether the fixed buffer was written back to disk.
    pub fixed: bool,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub mode: &'static str,
    /// Total candidate files scanned, clean ones included.
    pub checked: usize,
    pub files: Vec<FileReport>,
    pub outcome: &'static str,
}

/// Terminal state of one invocation.
///
/// `Written` is deliberate friction: fix mode exits non-zero after rewriting
/// files so the new working-tree state must be committed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    AutoFixed,
    Unresolved,
    Written,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Clean | Outcome::AutoFixed => 0,
            Outcome::Unresolved | Outcome::Written => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Clean => "clean",
            Outcome::AutoFixed => "auto_fixed",
            Outcome::Unresolved => "unresolved",
            Outcome::Written => "written",
        }
    }
}

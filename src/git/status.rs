//! Mirror clone outcome enumeration and utilities

/// Result of running one mirror clone
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CloneOutcome {
    /// The mirror was cloned successfully
    Cloned,
    /// Git refused because the mirror is already on disk
    AlreadyExists,
    /// Git exited non-zero for any other reason
    Failed {
        /// `None` when the process was terminated by a signal
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl CloneOutcome {
    /// Returns the emoji symbol for this outcome
    pub fn symbol(&self) -> &str {
        match self {
            CloneOutcome::Cloned => "🟢",
            CloneOutcome::AlreadyExists => "🟠",
            CloneOutcome::Failed { .. } => "🔴",
        }
    }

    /// Returns the text representation of this outcome
    pub fn text(&self) -> &str {
        match self {
            CloneOutcome::Cloned => "cloned",
            CloneOutcome::AlreadyExists => "exists",
            CloneOutcome::Failed { .. } => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CloneOutcome::Failed { .. })
    }
}

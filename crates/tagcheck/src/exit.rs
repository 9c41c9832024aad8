use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Error,
}

/// Outcome of a command, turned into the process exit code by `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    status: Status,
    message: Option<String>,
}

impl Exit {
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: Status::Success,
            message: None,
        }
    }

    #[must_use]
    pub fn error() -> Self {
        Self {
            status: Status::Error,
            message: None,
        }
    }

    /// Attach a summary printed to stderr on exit.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn into_exit_code(self) -> ExitCode {
        if let Some(message) = &self.message {
            eprintln!("{message}");
        }
        match self.status {
            Status::Success => ExitCode::SUCCESS,
            Status::Error => ExitCode::FAILURE,
        }
    }
}

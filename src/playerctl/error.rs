use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Failures talking to `playerctl`.
#[derive(Debug, Error)]
pub enum PlayerctlError {
    #[error("failed to run `{binary}`: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("{}", describe_failure(.status, .stderr))]
    Failed {
        binary: String,
        args: String,
        status: ExitStatus,
        stderr: String,
    },
}

// playerctl explains itself on stderr ("No players found"); fall back to the
// exit status when it is silent.
fn describe_failure(status: &ExitStatus, stderr: &str) -> String {
    if stderr.is_empty() {
        status.to_string()
    } else {
        stderr.to_string()
    }
}

use std::process::ExitCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("you need to use an account token instead of a user token")]
    UserToken,

    #[error("invalid format {0}")]
    Format(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Distinct non-zero process outcome per error kind.
    pub fn exit_code(&self) -> ExitCode {
        let code = match self {
            Error::Validation(_) => 2,
            Error::Config(_) => 3,
            Error::UserToken => 4,
            Error::NotFound(_) => 5,
            Error::Transport(_) => 6,
            Error::Format(_) => 7,
        };
        ExitCode::from(code)
    }
}

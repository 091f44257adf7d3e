use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("no quiz session has been started")]
    NoSession,
    #[error("could not read pack {path}: {source}")]
    PackIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse pack: {0}")]
    PackParse(#[from] serde_json::Error),
    #[error("invalid pack: {0}")]
    InvalidPack(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("malformed command: {0}")]
    MalformedCommand(String),
    #[error("{0}")]
    ControlDisabled(String),
    #[error("the screen writer has stopped")]
    ScreenClosed,
    #[error("could not set up logging: {0}")]
    Logger(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;

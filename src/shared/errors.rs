use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Invalid shell configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Navigation entry has an empty label (path: {path})")]
    EmptyLabel { path: String },

    #[error("Invalid navigation path for {label}: {path}")]
    InvalidPath { label: String, path: String },

    #[error("Duplicate navigation path: {0}")]
    DuplicatePath(String),

    #[error("Duplicate team id: {0}")]
    DuplicateTeamId(u32),

    #[error("Team initial must be two characters, got {initial:?} for {label}")]
    InvalidInitial { label: String, initial: String },
}

pub type Result<T> = std::result::Result<T, ShellError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Profile '{0}' not found")]
    UnknownProfile(String),

    #[error("Profile name is required")]
    EmptyName,

    #[error("Profile '{0}' already exists")]
    DuplicateName(String),

    #[error("Profile directory does not exist")]
    WorkDirMissing,

    #[error("Error launching browser: {0}")]
    Launch(std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

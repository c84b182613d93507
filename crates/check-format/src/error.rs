use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("git error")]
    Git(#[from] fence_git::GitError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

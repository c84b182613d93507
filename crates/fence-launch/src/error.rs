use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("expected exactly one test executable, got {count}")]
    ExpectedSingleExecutable { count: usize },
}

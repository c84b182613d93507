mod error;
mod launcher;
mod runfiles;

pub use error::LaunchError;
pub use launcher::{LaunchOptions, SpawnRequest, UnitTestLauncher};

pub type Result<T> = std::result::Result<T, LaunchError>;

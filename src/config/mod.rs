//! Configuration and environment inputs consumed by the checks.

pub mod environment;

pub use environment::{parse_dotenv, EnvFileState, EnvSnapshot, ENV_FILE_NAME};

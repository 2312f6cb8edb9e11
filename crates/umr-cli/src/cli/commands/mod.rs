//! CLI command handlers. Each command is in its own file.

mod config_path;
mod mirrors;
mod resolve;

pub use config_path::run_config_path;
pub use mirrors::run_mirrors;
pub use resolve::{run_explain, run_resolve};

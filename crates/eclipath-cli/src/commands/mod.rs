//! One module per subcommand.  Each exposes an `execute` function.

pub mod classpath;
pub mod completions;
pub mod config;
pub mod deps;
pub mod init;
pub mod projects;
pub mod resolve;

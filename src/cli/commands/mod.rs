//! Command implementations, one module per subcommand.

pub mod add;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod generate;
pub mod init;
pub mod list;
pub mod passwd;
pub mod shell;
pub mod status;

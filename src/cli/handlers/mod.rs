//! Shared command handlers

mod list;

pub use list::{run_list_command, run_show_command};

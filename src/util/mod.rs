//! Filesystem helpers used by the drivers and the dispatcher.
//!
//! - [`file_status`]: regular-file / directory checks, mtime and permission
//!   propagation
//! - [`file_list`]: recursive directory expansion for `-r`

pub mod file_list;
pub mod file_status;

pub use file_list::create_file_list;
pub use file_status::{copy_file_stat, is_directory, is_reg_file};

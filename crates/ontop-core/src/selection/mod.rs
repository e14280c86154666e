pub mod errors;
pub mod operations;
pub mod types;

pub use errors::SelectionError;
pub use operations::{
    filter_by_app, find_by_name, find_by_pid, list_targets, list_targets_with, main_windows,
    process_names, toggle_target,
};
pub use types::TargetWindow;

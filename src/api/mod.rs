pub mod process;

pub use process::{handle_process, ProcessQuery, __path_handle_process};

pub mod append_log;
pub mod list_logs;

pub use append_log::append_log_handler;
pub use list_logs::list_logs_handler;

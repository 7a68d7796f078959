pub mod constants;
pub mod log_level;
pub mod logger_error;
pub mod logger_receiver;
pub mod logger_sender;

pub const LOGGER_THREAD_NAME: &str = "statusbar-logger";

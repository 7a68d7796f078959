pub mod constants;
pub mod preferences_error;
pub mod store;
pub mod user_preferences;

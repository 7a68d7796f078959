use crate::app::error_message::ErrorMessage;

/// Preferences file posible errors.
#[derive(Debug)]
pub enum PreferencesError {
    ReadError(std::io::Error),
    WriteError(std::io::Error),
    InvalidSetting(ErrorMessage),
    NoFileAttached,
}

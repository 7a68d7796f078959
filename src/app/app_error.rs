use crate::app::error_message::ErrorMessage;
use crate::logger::logger_error::LoggerError;
use crate::preferences::preferences_error::PreferencesError;
use crate::ui::setup::UserInterfaceError;

/// Represents an error that happened while starting the status bar application.
#[derive(Debug)]
pub enum StatusBarAppError {
    ArgumentError(ErrorMessage),
    ConfigurationFileError(ErrorMessage),
    PreferencesError(PreferencesError),
    LogError(LoggerError),
    UIBuildingError(UserInterfaceError),
}

impl From<LoggerError> for StatusBarAppError {
    fn from(err: LoggerError) -> StatusBarAppError {
        StatusBarAppError::LogError(err)
    }
}

impl From<PreferencesError> for StatusBarAppError {
    fn from(err: PreferencesError) -> StatusBarAppError {
        StatusBarAppError::PreferencesError(err)
    }
}

impl From<UserInterfaceError> for StatusBarAppError {
    fn from(err: UserInterfaceError) -> StatusBarAppError {
        StatusBarAppError::UIBuildingError(err)
    }
}

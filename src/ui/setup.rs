use super::client_window::ClientWindow;
use super::gtk_prompt::GtkLimitPrompt;
use super::gtk_timer::GtkTimer;
use super::gtk_view::GtkBarView;
use crate::app::app_error::StatusBarAppError;
use crate::app::error_message::ErrorMessage;
use crate::config::cfg::Cfg;
use crate::logger::logger_receiver::Logger;
use crate::preferences::user_preferences::Preferences;
use crate::session::simulated::SimulatedSession;
use crate::status_bar::statusbar::{Collaborators, StatusBar};
use crate::status_bar::timer::RepeatingTimer;
use gtk::gio;
use gtk::prelude::*;
use std::rc::Rc;
use std::time::Duration;

const SIMULATION_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub enum UserInterfaceError {
    NoConfigurationFile,
    InvalidConfigurationPath(ErrorMessage),
}

/// Builds the client window for the configuration file passed on the command line
/// and starts refreshing its status bar.
///
/// On close, the status bar stops refreshing and the preferences are saved.
pub fn build_ui(app: &gtk::Application, files: &[gio::File]) -> Result<(), StatusBarAppError> {
    let config_path = configuration_path(files)?;
    let config = Cfg::new(&config_path).map_err(|err| {
        StatusBarAppError::ConfigurationFileError(ErrorMessage::new(format!(
            "{}: {}",
            config_path, err
        )))
    })?;

    let logger = Logger::new(&config.log_directory, config.log_level)?;
    let logger_sender = logger.new_sender();
    logger_sender.info("Configuration file loaded correctly.");

    let preferences = Rc::new(Preferences::load(&config.preferences_file)?);
    let session = Rc::new(SimulatedSession::new(
        preferences.clone(),
        logger.new_sender(),
    ));

    let client_window = ClientWindow::new(app);
    let view = Rc::new(GtkBarView::new(client_window.statusbar()));
    let bar = StatusBar::with_refresh_interval(
        Collaborators {
            session: session.clone(),
            preferences: preferences.clone(),
            view: view.clone(),
            prompt: Rc::new(GtkLimitPrompt::new(client_window.window())),
            timer: Rc::new(GtkTimer::new()),
            logger_sender: logger.new_sender(),
        },
        config.refresh_interval(),
    );
    view.connect_actions(&bar);

    let simulation_timer = GtkTimer::new();
    simulation_timer.start(
        SIMULATION_INTERVAL,
        Box::new(move || session.tick(SIMULATION_INTERVAL)),
    );

    client_window.show();
    bar.initialize();
    logger_sender.info("Status bar started.");

    client_window.window().connect_delete_event(move |_, _| {
        bar.stop_refresh();
        simulation_timer.stop();
        match preferences.save() {
            Ok(_) => logger_sender.info("Preferences saved."),
            Err(err) => logger_sender.error(&format!("Couldn't save the preferences: {:?}", err)),
        }
        gtk::Inhibit(false)
    });

    Ok(())
}

fn configuration_path(files: &[gio::File]) -> Result<String, UserInterfaceError> {
    let file = files
        .first()
        .ok_or(UserInterfaceError::NoConfigurationFile)?;
    let path = file.path().ok_or_else(|| {
        UserInterfaceError::InvalidConfigurationPath(ErrorMessage::new(file.uri().to_string()))
    })?;
    path.to_str().map(|path| path.to_string()).ok_or_else(|| {
        UserInterfaceError::InvalidConfigurationPath(ErrorMessage::new(
            path.display().to_string(),
        ))
    })
}

use dtorrent_statusbar::app::app_error::StatusBarAppError;
use dtorrent_statusbar::app::error_message::ErrorMessage;
use dtorrent_statusbar::ui::setup;
use gtk::gio::ApplicationFlags;
use gtk::prelude::*;
use gtk::Application;
use std::env;

fn main() -> Result<(), StatusBarAppError> {
    if env::args().count() != 2 {
        return Err(StatusBarAppError::ArgumentError(ErrorMessage::new(
            "Incorrect number of arguments. Only the path to the configuration file should be passed".to_string(),
        )));
    };

    let app = Application::builder()
        .application_id("ar.uba.fi.dtorrent.statusbar")
        .flags(ApplicationFlags::HANDLES_OPEN)
        .build();

    app.connect_open(|app, files, _hint| {
        if let Err(err) = setup::build_ui(app, files) {
            eprintln!("{:?}", err);
        }
    });

    app.run();
    Ok(())
}

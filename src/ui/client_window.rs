use gtk::prelude::*;

const WINDOW_TITLE: &str = "dTorrent";

/// Main window: an empty transfer area with the status bar at the bottom.
pub struct ClientWindow {
    window: gtk::ApplicationWindow,
    statusbar: gtk::Statusbar,
}

impl ClientWindow {
    pub fn new(app: &gtk::Application) -> Self {
        let window = gtk::ApplicationWindow::new(app);
        window.set_title(WINDOW_TITLE);
        window.set_default_size(900, 480);

        let layout = gtk::Box::new(gtk::Orientation::Vertical, 0);
        let transfers = gtk::Label::new(Some("No torrents"));
        layout.pack_start(&transfers, true, true, 0);

        let statusbar = gtk::Statusbar::new();
        layout.pack_end(&statusbar, false, false, 0);
        window.add(&layout);

        Self { window, statusbar }
    }

    pub fn window(&self) -> &gtk::ApplicationWindow {
        &self.window
    }

    pub fn statusbar(&self) -> &gtk::Statusbar {
        &self.statusbar
    }

    pub fn show(&self) {
        self.window.show_all();
    }
}

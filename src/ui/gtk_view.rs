use crate::status_bar::connection::ConnectionState;
use crate::status_bar::snapshot::BarSnapshot;
use crate::status_bar::statusbar::StatusBar;
use crate::status_bar::view::{AltSpeedsButton, BarView, RestartBanner};
use gtk::glib;
use gtk::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

const STATUS_CONTEXT: &str = "status-bar-messages";

/// The status bar widgets, packed at the end of a `gtk::Statusbar`.
///
/// Layout: DHT nodes | connection | alternative speeds | download | upload.
pub struct GtkBarView {
    statusbar: gtk::Statusbar,
    context_id: u32,
    dht_label: gtk::Label,
    connection_button: gtk::Button,
    connection_image: gtk::Image,
    alt_speeds_button: gtk::ToggleButton,
    alt_speeds_image: gtk::Image,
    download_button: gtk::Button,
    upload_button: gtk::Button,
    // set_active() emits "clicked" too, which must not count as a user toggle
    updating_alt_speeds: Rc<Cell<bool>>,
}

impl GtkBarView {
    pub fn new(statusbar: &gtk::Statusbar) -> Self {
        let context_id = statusbar.context_id(STATUS_CONTEXT);

        let dht_label = gtk::Label::new(Some("DHT: 0 nodes"));

        let connection_state = ConnectionState::Firewalled;
        let connection_image = icon(connection_state.icon_name());
        let connection_button = gtk::Button::new();
        flatten(&connection_button, &connection_image);
        connection_button.set_tooltip_markup(Some(&connection_state.tooltip_markup()));

        let alt_speeds_image = icon(AltSpeedsButton::for_mode(false).icon_name);
        let alt_speeds_button = gtk::ToggleButton::new();
        flatten(&alt_speeds_button, &alt_speeds_image);

        let download_button = gtk::Button::new();
        flatten(&download_button, &icon("go-down"));
        download_button.set_tooltip_text(Some("Click to change the global download speed limit"));

        let upload_button = gtk::Button::new();
        flatten(&upload_button, &icon("go-up"));
        upload_button.set_tooltip_text(Some("Click to change the global upload speed limit"));

        let container = gtk::Box::new(gtk::Orientation::Horizontal, 4);
        let widgets: [&gtk::Widget; 5] = [
            dht_label.upcast_ref(),
            connection_button.upcast_ref(),
            alt_speeds_button.upcast_ref(),
            download_button.upcast_ref(),
            upload_button.upcast_ref(),
        ];
        for (index, widget) in widgets.iter().enumerate() {
            if index > 0 {
                container.pack_start(
                    &gtk::Separator::new(gtk::Orientation::Vertical),
                    false,
                    false,
                    0,
                );
            }
            container.pack_start(*widget, false, false, 0);
        }
        statusbar.pack_end(&container, false, false, 0);

        Self {
            statusbar: statusbar.clone(),
            context_id,
            dht_label,
            connection_button,
            connection_image,
            alt_speeds_button,
            alt_speeds_image,
            download_button,
            upload_button,
            updating_alt_speeds: Rc::new(Cell::new(false)),
        }
    }

    /// Routes clicks on the speed labels and the alternative speeds button to `bar`.
    pub fn connect_actions(&self, bar: &Rc<StatusBar>) {
        let weak_bar = Rc::downgrade(bar);
        self.download_button.connect_clicked(move |_| {
            if let Some(bar) = weak_bar.upgrade() {
                bar.prompt_download_limit();
            }
        });

        let weak_bar = Rc::downgrade(bar);
        self.upload_button.connect_clicked(move |_| {
            if let Some(bar) = weak_bar.upgrade() {
                bar.prompt_upload_limit();
            }
        });

        let weak_bar = Rc::downgrade(bar);
        let updating = self.updating_alt_speeds.clone();
        self.alt_speeds_button.connect_clicked(move |_| {
            if updating.get() {
                return;
            }
            if let Some(bar) = weak_bar.upgrade() {
                bar.toggle_alternative_speeds();
            }
        });
    }
}

impl BarView for GtkBarView {
    fn render(&self, snapshot: &BarSnapshot) {
        self.connection_image
            .set_from_icon_name(Some(snapshot.connection.icon_name()), gtk::IconSize::Menu);
        self.connection_button
            .set_tooltip_markup(Some(&snapshot.connection.tooltip_markup()));

        match snapshot.dht_text() {
            Some(text) => {
                self.dht_label.set_text(&text);
                self.dht_label.set_visible(true);
            }
            None => self.dht_label.set_visible(false),
        }

        self.download_button.set_label(&snapshot.download_text);
        self.upload_button.set_label(&snapshot.upload_text);
    }

    fn set_dht_visible(&self, visible: bool) {
        self.dht_label.set_visible(visible);
    }

    fn set_alt_speeds_button(&self, button: &AltSpeedsButton) {
        self.updating_alt_speeds.set(true);
        self.alt_speeds_image
            .set_from_icon_name(Some(button.icon_name), gtk::IconSize::Menu);
        self.alt_speeds_button.set_tooltip_text(Some(button.tooltip));
        self.alt_speeds_button.set_active(button.pressed);
        self.updating_alt_speeds.set(false);
    }

    fn show_message(&self, message: &str, timeout: Duration) {
        let message_id = self.statusbar.push(self.context_id, message);

        let statusbar = self.statusbar.clone();
        let context_id = self.context_id;
        let mut pending = Some(message_id);
        let _source = glib::timeout_add_local(timeout, move || {
            if let Some(message_id) = pending.take() {
                StatusbarExt::remove(&statusbar, context_id, message_id);
            }
            glib::Continue(false)
        });
    }

    fn insert_restart_banner(&self, banner: &RestartBanner) {
        let image = gtk::Image::from_icon_name(Some(banner.icon_name), gtk::IconSize::LargeToolbar);
        image.set_tooltip_text(Some(banner.text));

        let label = gtk::Label::new(Some(banner.text));
        label.set_ellipsize(gtk::pango::EllipsizeMode::End);

        self.statusbar.pack_start(&image, false, false, 0);
        self.statusbar.reorder_child(&image, 0);
        self.statusbar.pack_start(&label, true, true, 0);
        self.statusbar.reorder_child(&label, 1);
        image.show();
        label.show();
    }
}

fn icon(icon_name: &str) -> gtk::Image {
    gtk::Image::from_icon_name(Some(icon_name), gtk::IconSize::Menu)
}

fn flatten<B: IsA<gtk::Button>>(button: &B, image: &gtk::Image) {
    let button = button.upcast_ref::<gtk::Button>();
    button.set_relief(gtk::ReliefStyle::None);
    button.set_focus_on_click(false);
    button.set_always_show_image(true);
    button.set_image(Some(image));
}

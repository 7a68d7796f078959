use crate::session::rate_limit::RateLimit;
use crate::status_bar::prompt::LimitPrompt;
use gtk::prelude::*;

const MAX_LIMIT_KIB: f64 = 1_000_000_f64;
const DISPLAYED_DIGITS: u32 = 1;
// Half of the smallest step the spin button can show.
const UNCHANGED_TOLERANCE_KIB: f64 = 0.05;

/// Modal dialog asking for a speed limit in KiB/s, 0 meaning unlimited.
pub struct GtkLimitPrompt {
    parent: gtk::ApplicationWindow,
}

impl GtkLimitPrompt {
    pub fn new(parent: &gtk::ApplicationWindow) -> Self {
        Self {
            parent: parent.clone(),
        }
    }
}

impl LimitPrompt for GtkLimitPrompt {
    fn ask_speed_limit(&self, title: &str, current: RateLimit) -> Option<i64> {
        let dialog = gtk::Dialog::with_buttons(
            Some(title),
            Some(&self.parent),
            gtk::DialogFlags::MODAL | gtk::DialogFlags::DESTROY_WITH_PARENT,
            &[
                ("_Cancel", gtk::ResponseType::Cancel),
                ("_OK", gtk::ResponseType::Ok),
            ],
        );
        dialog.set_default_response(gtk::ResponseType::Ok);

        let spin_button = gtk::SpinButton::with_range(0_f64, MAX_LIMIT_KIB, 1_f64);
        spin_button.set_digits(DISPLAYED_DIGITS);
        spin_button.set_value(current.as_kib_per_second().unwrap_or(0_f64));
        let prefilled_kib = spin_button.value();
        spin_button.set_activates_default(true);
        let unit_label = gtk::Label::new(Some("KiB/s (0 means unlimited)"));

        let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        row.pack_start(&spin_button, true, true, 0);
        row.pack_start(&unit_label, false, false, 0);
        dialog.content_area().pack_start(&row, true, true, 6);
        dialog.show_all();

        let response = dialog.run();
        let entered_kib = spin_button.value();
        dialog.close();

        match response {
            gtk::ResponseType::Ok => Some(answered_limit(current, prefilled_kib, entered_kib)),
            _ => None,
        }
    }
}

/// Bytes per second for the value left in the spin button.
///
/// The button only shows one decimal of KiB/s, so a limit that was confirmed
/// without being edited keeps its exact byte value instead of the rounded one.
fn answered_limit(current: RateLimit, prefilled_kib: f64, entered_kib: f64) -> i64 {
    if (entered_kib - prefilled_kib).abs() < UNCHANGED_TOLERANCE_KIB {
        return current.bytes_per_second().map_or(0, i64::from);
    }
    (entered_kib * 1024_f64).round() as i64
}

use crate::status_bar::timer::RepeatingTimer;
use gtk::glib;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// `RepeatingTimer` on top of the GLib main loop.
///
/// A stopped or restarted timer lets its pending source return `Continue(false)`
/// on the next wakeup, so an old task never runs again.
#[derive(Default)]
pub struct GtkTimer {
    generation: Rc<Cell<u64>>,
    running: Rc<Cell<bool>>,
}

impl GtkTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepeatingTimer for GtkTimer {
    fn start(&self, period: Duration, mut tick: Box<dyn FnMut()>) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.running.set(true);

        let current_generation = self.generation.clone();
        let running = self.running.clone();
        let _source = glib::timeout_add_local(period, move || {
            if !running.get() || current_generation.get() != generation {
                return glib::Continue(false);
            }
            tick();
            glib::Continue(true)
        });
    }

    fn stop(&self) {
        self.running.set(false);
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

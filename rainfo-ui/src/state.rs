//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the one `Session` in a signal and is provided with
//! `use_context_provider` at the root. Views retrieve it with
//! `use_context::<AppState>()` and only change it through the setters below.

use dioxus::prelude::*;
use rainfo_session::{Screen, Session, UsageRecord};
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AppState {
    session: Signal<Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.read().screen()
    }

    pub fn location(&self) -> String {
        self.session.read().location().to_string()
    }

    pub fn usages(&self) -> Rc<Vec<UsageRecord>> {
        Rc::clone(self.session.read().usages())
    }

    pub fn total_gallons(&self) -> f64 {
        self.session.read().total_gallons()
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.session.write().navigate(screen);
    }

    pub fn set_location(&mut self, raw: String) {
        self.session.write().set_location(raw);
    }

    pub fn record_usage(&mut self, name: String, gallons: f64) {
        self.session.write().record_usage(name, gallons);
    }
}

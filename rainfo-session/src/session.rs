use crate::clock::{Clock, SystemClock};
use crate::screen::Screen;
use crate::usage::{self, UsageRecord};
use log::{debug, info};
use std::rc::Rc;

/// Navigation and session data shared by every view.
///
/// The usage log is held behind an `Rc` and replaced copy-on-write, so a
/// view that kept the previous `Rc` still sees the old log and can detect
/// the change with `Rc::ptr_eq`.
#[derive(Debug, Clone)]
pub struct Session<C = SystemClock> {
    screen: Screen,
    location: String,
    usages: Rc<Vec<UsageRecord>>,
    clock: C,
}

impl Session<SystemClock> {
    /// A session on the title screen with no location and no usage.
    pub fn new() -> Self {
        Session::with_clock(SystemClock)
    }
}

impl Default for Session<SystemClock> {
    fn default() -> Self {
        Session::new()
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            screen: Screen::default(),
            location: String::new(),
            usages: Rc::new(Vec::new()),
            clock,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The location exactly as typed.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn usages(&self) -> &Rc<Vec<UsageRecord>> {
        &self.usages
    }

    /// Switch to `screen`. Any screen may follow any other.
    pub fn navigate(&mut self, screen: Screen) {
        info!("navigate {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }

    /// Replace the stored location text. It is resolved when read, not here.
    pub fn set_location(&mut self, raw: impl Into<String>) {
        self.location = raw.into();
        debug!("location set to {:?}", self.location);
    }

    /// Append a record stamped with the current time and return the new log.
    pub fn record_usage(&mut self, name: impl Into<String>, gallons: f64) -> Rc<Vec<UsageRecord>> {
        let record = UsageRecord {
            name: name.into(),
            gallons,
            recorded_at: self.clock.now(),
        };
        info!("recorded {} gallons for {:?}", record.gallons, record.name);
        Rc::make_mut(&mut self.usages).push(record);
        Rc::clone(&self.usages)
    }

    pub fn total_gallons(&self) -> f64 {
        usage::total_gallons(&self.usages)
    }
}

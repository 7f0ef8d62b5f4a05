//! Session state for Rainfo.
//!
//! A [`Session`] is the single source of truth the views share: the active
//! [`Screen`], the raw location text and the usage log. It is created once
//! by the application root and only changes through its setters.

pub mod clock;
pub mod screen;
pub mod session;
pub mod usage;

pub use clock::{Clock, SystemClock};
pub use screen::Screen;
pub use session::Session;
pub use usage::{parse_gallons, total_gallons, UsageRecord};

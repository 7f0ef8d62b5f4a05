//! Location resolution for Rainfo.
//!
//! The state and rainfall tables are embedded CSV fixtures, parsed and
//! validated once into a [`StateAtlas`]. Everything built on top of the
//! atlas is total: unknown input yields [`INVALID_STATE`] or `None`.

pub mod atlas;
pub mod drought_map;
pub mod error;
pub mod resolver;
pub mod text;
pub mod tips;

pub use atlas::{StateAtlas, UsState};
pub use drought_map::{drought_map_url, drought_map_url_for, DROUGHT_MONITOR_URL};
pub use error::AtlasError;
pub use resolver::{lookup_rainfall, resolve_code, resolve_name, INVALID_STATE};
pub use text::capitalize;
pub use tips::{Tip, TipCategory};

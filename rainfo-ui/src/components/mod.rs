//! Reusable Dioxus RSX components for the Rainfo screens.

mod back_button;
mod drop_down;
mod drought_map;
mod location_input;
mod nav_button;
mod rainfall_figure;
mod usage_form;
mod usage_log;

pub use back_button::BackButton;
pub use drop_down::DropDown;
pub use drought_map::DroughtMap;
pub use location_input::LocationInput;
pub use nav_button::NavButton;
pub use rainfall_figure::RainfallFigure;
pub use usage_form::UsageForm;
pub use usage_log::UsageLog;

//! One view per [`Screen`], selected by [`ScreenView`].

mod drought_monitor;
mod how_to_help;
mod rainfall_levels;
mod title;
mod usage_recorder;

pub use drought_monitor::DroughtMonitorScreen;
pub use how_to_help::HowToHelpScreen;
pub use rainfall_levels::RainfallLevelsScreen;
pub use title::TitleScreen;
pub use usage_recorder::UsageRecorderScreen;

use dioxus::prelude::*;
use rainfo_session::Screen;

/// Renders the view for `screen`.
#[component]
pub fn ScreenView(screen: Screen) -> Element {
    match screen {
        Screen::Title => rsx! { TitleScreen {} },
        Screen::DroughtMonitor => rsx! { DroughtMonitorScreen {} },
        Screen::RainfallLevels => rsx! { RainfallLevelsScreen {} },
        Screen::UsageRecorder => rsx! { UsageRecorderScreen {} },
        Screen::HowToHelp => rsx! { HowToHelpScreen {} },
    }
}

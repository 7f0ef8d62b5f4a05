use serde::{Deserialize, Serialize};
use std::fmt;

/// The views of the app. Exactly one is active at a time.
///
/// Every screen can be reached from every other screen; there is no
/// terminal state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Title,
    DroughtMonitor,
    RainfallLevels,
    UsageRecorder,
    HowToHelp,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Title,
        Screen::DroughtMonitor,
        Screen::RainfallLevels,
        Screen::UsageRecorder,
        Screen::HowToHelp,
    ];

    /// Heading shown at the top of the screen.
    pub fn heading(&self) -> &'static str {
        match self {
            Screen::Title => "Rainfo",
            Screen::DroughtMonitor => "Drought Monitor",
            Screen::RainfallLevels => "Rainfall Levels",
            Screen::UsageRecorder => "Usage Recorder",
            Screen::HowToHelp => "How to Help",
        }
    }

    /// Everything but the title screen gets a button back to it.
    pub fn has_back_button(&self) -> bool {
        *self != Screen::Title
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

#[cfg(test)]
mod tests {
    use super::Screen;

    #[test]
    fn test_default_is_title() {
        assert_eq!(Screen::default(), Screen::Title);
    }

    #[test]
    fn test_back_button() {
        assert!(!Screen::Title.has_back_button());
        for screen in &Screen::ALL[1..] {
            assert!(screen.has_back_button(), "{}", screen);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Screen::HowToHelp).unwrap();
        assert_eq!(json, "\"HowToHelp\"");
        let back: Screen = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Screen::HowToHelp);
    }
}

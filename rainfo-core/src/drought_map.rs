//! Address of the U.S. Drought Monitor state map.

use crate::atlas::StateAtlas;

/// Base address of the per-state drought map page.
pub const DROUGHT_MONITOR_URL: &str =
    "https://droughtmonitor.unl.edu/CurrentMap/StateDroughtMonitor.aspx";

/// Map address for an already resolved two-letter code.
pub fn drought_map_url(code: &str) -> String {
    format!("{}?{}", DROUGHT_MONITOR_URL, code)
}

impl StateAtlas {
    /// Map address for free-form location input, if it names a state.
    pub fn drought_map_url_for(&self, location: &str) -> Option<String> {
        self.find_code(location).map(drought_map_url)
    }
}

/// [`StateAtlas::drought_map_url_for`] on the embedded atlas.
pub fn drought_map_url_for(location: &str) -> Option<String> {
    StateAtlas::embedded().drought_map_url_for(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drought_map_url() {
        assert_eq!(
            drought_map_url("CA"),
            "https://droughtmonitor.unl.edu/CurrentMap/StateDroughtMonitor.aspx?CA"
        );
    }

    #[test]
    fn test_drought_map_url_for_location() {
        assert_eq!(
            drought_map_url_for("oregon").as_deref(),
            Some("https://droughtmonitor.unl.edu/CurrentMap/StateDroughtMonitor.aspx?OR")
        );
        assert_eq!(
            drought_map_url_for("or").as_deref(),
            Some("https://droughtmonitor.unl.edu/CurrentMap/StateDroughtMonitor.aspx?OR")
        );
        assert_eq!(drought_map_url_for("Invalid State"), None);
    }
}

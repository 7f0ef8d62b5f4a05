//! Single-location lookups.

use anyhow::{anyhow, bail};
use log::debug;
use rainfo_core::{capitalize, StateAtlas};

/// The code, or "Invalid State".
pub fn code_line(atlas: &StateAtlas, location: &str) -> String {
    atlas.resolve_code(location).to_string()
}

/// The name, or "Invalid State".
pub fn name_line(atlas: &StateAtlas, location: &str) -> String {
    atlas.resolve_name(location).to_string()
}

/// "{State} had {inches} inches of rainfall this year."
pub fn rainfall_line(atlas: &StateAtlas, location: &str) -> anyhow::Result<String> {
    let Some(name) = atlas.find_name(location) else {
        bail!("{:?} is not a US state name or code", location);
    };
    let inches = atlas
        .lookup_rainfall(name)
        .ok_or_else(|| anyhow!("no rainfall recorded for {}", name))?;
    debug!("{} -> {} ({} in)", location, name, inches);
    Ok(format!(
        "{} had {} inches of rainfall this year.",
        capitalize(name),
        inches
    ))
}

pub fn map_url_line(atlas: &StateAtlas, location: &str) -> anyhow::Result<String> {
    atlas
        .drought_map_url_for(location)
        .ok_or_else(|| anyhow!("{:?} is not a US state name or code", location))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atlas() -> &'static StateAtlas {
        StateAtlas::embedded()
    }

    #[test]
    fn test_code_and_name_lines() {
        assert_eq!(code_line(atlas(), "vermont"), "VT");
        assert_eq!(code_line(atlas(), "Narnia"), "Invalid State");
        assert_eq!(name_line(atlas(), "vt"), "vermont");
        assert_eq!(name_line(atlas(), "Vermont"), "Vermont");
    }

    #[test]
    fn test_rainfall_line() {
        assert_eq!(
            rainfall_line(atlas(), "RI").unwrap(),
            "Rhode island had 47.9 inches of rainfall this year."
        );
        assert_eq!(
            rainfall_line(atlas(), "IOWA").unwrap(),
            "Iowa had 34 inches of rainfall this year."
        );
    }

    #[test]
    fn test_rainfall_line_unknown() {
        let err = rainfall_line(atlas(), "Narnia").unwrap_err();
        assert!(err.to_string().contains("Narnia"));
    }

    #[test]
    fn test_map_url_line() {
        assert_eq!(
            map_url_line(atlas(), "Nevada").unwrap(),
            "https://droughtmonitor.unl.edu/CurrentMap/StateDroughtMonitor.aspx?NV"
        );
        assert!(map_url_line(atlas(), "").is_err());
    }
}

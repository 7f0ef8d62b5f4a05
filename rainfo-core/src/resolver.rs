//! Free-form location input to state code / state name.
//!
//! Input is only case folded: no trimming and no partial matches. A name
//! match always wins over a code match.

use crate::atlas::StateAtlas;
use log::debug;

/// Returned by [`resolve_code`] and [`resolve_name`] for unrecognized input.
pub const INVALID_STATE: &str = "Invalid State";

impl StateAtlas {
    /// Two-letter code for `input`, matched first as a name, then as a code.
    pub fn find_code(&self, input: &str) -> Option<&str> {
        if let Some(state) = self.by_name(&input.to_lowercase()) {
            return Some(state.code.as_str());
        }
        self.by_code(&input.to_uppercase())
            .map(|state| state.code.as_str())
    }

    /// Name for `input`, matched first as a code, then as a name.
    ///
    /// A code yields the canonical lowercase name. A name is returned as
    /// typed, so "New York" stays "New York".
    pub fn find_name<'a>(&'a self, input: &'a str) -> Option<&'a str> {
        if let Some(state) = self.by_code(&input.to_uppercase()) {
            return Some(state.name.as_str());
        }
        self.by_name(&input.to_lowercase()).map(|_| input)
    }

    /// [`find_code`](Self::find_code), or [`INVALID_STATE`].
    pub fn resolve_code(&self, input: &str) -> &str {
        self.find_code(input).unwrap_or_else(|| {
            debug!("no state code for {:?}", input);
            INVALID_STATE
        })
    }

    /// [`find_name`](Self::find_name), or [`INVALID_STATE`].
    pub fn resolve_name<'a>(&'a self, input: &'a str) -> &'a str {
        self.find_name(input).unwrap_or_else(|| {
            debug!("no state name for {:?}", input);
            INVALID_STATE
        })
    }

    /// Yearly rainfall in inches for a state name, any case.
    pub fn lookup_rainfall(&self, name: &str) -> Option<f64> {
        self.rainfall_for(&name.to_lowercase())
    }
}

/// Resolve against the embedded atlas. See [`StateAtlas::resolve_code`].
pub fn resolve_code(input: &str) -> &'static str {
    StateAtlas::embedded().resolve_code(input)
}

/// Resolve against the embedded atlas. See [`StateAtlas::resolve_name`].
pub fn resolve_name(input: &str) -> &str {
    StateAtlas::embedded().resolve_name(input)
}

/// Look up against the embedded atlas. See [`StateAtlas::lookup_rainfall`].
pub fn lookup_rainfall(name: &str) -> Option<f64> {
    StateAtlas::embedded().lookup_rainfall(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_code_by_name() {
        assert_eq!(resolve_code("california"), "CA");
        assert_eq!(resolve_code("California"), "CA");
        assert_eq!(resolve_code("NEW MEXICO"), "NM");
    }

    #[test]
    fn test_resolve_code_by_code() {
        assert_eq!(resolve_code("CA"), "CA");
        assert_eq!(resolve_code("ca"), "CA");
        assert_eq!(resolve_code("wY"), "WY");
    }

    #[test]
    fn test_resolve_code_unknown() {
        assert_eq!(resolve_code("Nowhereland"), INVALID_STATE);
        assert_eq!(resolve_code(""), INVALID_STATE);
        assert_eq!(resolve_code("XX"), INVALID_STATE);
    }

    #[test]
    fn test_no_trimming() {
        assert_eq!(resolve_code(" ohio"), INVALID_STATE);
        assert_eq!(resolve_code("OH "), INVALID_STATE);
        assert_eq!(resolve_name("ohio "), INVALID_STATE);
    }

    #[test]
    fn test_no_partial_match() {
        assert_eq!(resolve_code("new"), INVALID_STATE);
        assert_eq!(resolve_code("carolina"), INVALID_STATE);
        assert_eq!(resolve_name("C"), INVALID_STATE);
    }

    #[test]
    fn test_resolve_name_from_code() {
        assert_eq!(resolve_name("CA"), "california");
        assert_eq!(resolve_name("ri"), "rhode island");
    }

    #[test]
    fn test_resolve_name_keeps_input_casing() {
        assert_eq!(resolve_name("california"), "california");
        assert_eq!(resolve_name("CaLiFoRnIa"), "CaLiFoRnIa");
        assert_eq!(resolve_name("New York"), "New York");
    }

    #[test]
    fn test_resolve_name_unknown() {
        assert_eq!(resolve_name("xx"), INVALID_STATE);
        assert_eq!(resolve_name("atlantis"), INVALID_STATE);
    }

    #[test]
    fn test_find_variants() {
        let atlas = StateAtlas::embedded();
        assert_eq!(atlas.find_code("texas"), Some("TX"));
        assert_eq!(atlas.find_code("Texarkana"), None);
        assert_eq!(atlas.find_name("tx"), Some("texas"));
        assert_eq!(atlas.find_name("Texarkana"), None);
    }

    #[test]
    fn test_lookup_rainfall() {
        assert_eq!(lookup_rainfall("hawaii"), Some(63.7));
        assert_eq!(lookup_rainfall("HAWAII"), Some(63.7));
        assert_eq!(lookup_rainfall("Rhode Island"), Some(47.9));
        assert_eq!(lookup_rainfall("atlantis"), None);
    }

    #[test]
    fn test_lookup_rainfall_wants_a_name() {
        assert_eq!(lookup_rainfall("HI"), None);
    }
}

//! Shared inline styles.

/// Dark purple used for text and outlines.
pub const INK: &str = "#2d213f";

/// Highlight color for big numbers and the log header.
pub const ACCENT: &str = "#92c1ca";

/// Light blue box with a purple outline, used by inputs and buttons.
pub const BOX: &str = "background-color: #aae1e9; outline: 1px solid #2d213f; border: none;";

pub const HEADING: &str = "font-size: 1.875rem; text-align: center; margin-top: 0.75rem;";

pub const BIG_NUMBER: &str = "color: #92c1ca; font-size: 1.5rem; font-weight: bold; -webkit-text-stroke: 1px #2d213f;";

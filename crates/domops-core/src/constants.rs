// CSS properties driven by show/hide
pub const DISPLAY_PROPERTY: &str = "display";
pub const VISIBILITY_PROPERTY: &str = "visibility";

// Channel values
pub const DISPLAY_NONE: &str = "none";
pub const VISIBILITY_HIDDEN: &str = "hidden";
pub const VISIBILITY_VISIBLE: &str = "visible";

/// Display used when a tag measures as "none", measures empty, or cannot be
/// measured at all (no styling engine).
pub const FALLBACK_DISPLAY: &str = "block";

// Text forms of non-finite numbers, matching `String(n)` in a browser
pub const POSITIVE_INFINITY_TEXT: &str = "Infinity";
pub const NEGATIVE_INFINITY_TEXT: &str = "-Infinity";

// Expando property on element objects holding the display value a `hide` overwrote.
// Not an attribute, so it never shows up in markup.
pub const DISPLAY_STASH_KEY: &str = "__domopsDisplay";

// Property read from the probe element's computed style
pub const PROBE_PROPERTY: &str = "display";

// Used by `initLogging` when no level is given
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

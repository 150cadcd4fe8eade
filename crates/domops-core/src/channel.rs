use std::fmt;
use std::str::FromStr;

use crate::constants::{DISPLAY_NONE, DISPLAY_PROPERTY, VISIBILITY_HIDDEN, VISIBILITY_PROPERTY};
use crate::error::DomError;

/// Which presentation property show/hide/toggle act on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Layout presence (`display`).
    #[default]
    Display,
    /// Paint-only presence (`visibility`).
    Visibility,
}

impl Channel {
    #[inline]
    pub fn property(self) -> &'static str {
        match self {
            Channel::Display => DISPLAY_PROPERTY,
            Channel::Visibility => VISIBILITY_PROPERTY,
        }
    }

    #[inline]
    pub fn hidden_value(self) -> &'static str {
        match self {
            Channel::Display => DISPLAY_NONE,
            Channel::Visibility => VISIBILITY_HIDDEN,
        }
    }

    /// Parse an optional channel name; `None` selects the default channel.
    pub fn parse_optional(name: Option<&str>) -> Result<Channel, DomError> {
        name.map_or(Ok(Channel::default()), str::parse)
    }
}

impl FromStr for Channel {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "display" => Ok(Channel::Display),
            "visibility" => Ok(Channel::Visibility),
            other => Err(DomError::UnknownChannel(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

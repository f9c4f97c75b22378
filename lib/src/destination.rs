use crate::error::ExportError;
use crate::profile::{ExportProfile, INSTAPAPER, RAINDROP};
use std::fmt;
use std::str::FromStr;

/// Import service a GoodLinks export can be converted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Instapaper,
    Raindrop,
}

impl Destination {
    pub const ALL: [Destination; 2] = [Destination::Instapaper, Destination::Raindrop];

    pub fn profile(self) -> &'static ExportProfile {
        match self {
            Destination::Instapaper => &INSTAPAPER,
            Destination::Raindrop => &RAINDROP,
        }
    }

    /// Name of the CSV file written for this destination
    pub fn filename(self) -> &'static str {
        self.profile().filename
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Destination::Instapaper => "instapaper",
            Destination::Raindrop => "raindrop",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instapaper" => Ok(Destination::Instapaper),
            "raindrop" => Ok(Destination::Raindrop),
            _ => Err(ExportError::UnknownDestination(s.to_string())),
        }
    }
}

use std::{fmt::Display, str::FromStr};

use crate::arg_parse_err::ArgParseErr;

/// Transparency of the background in percent.
/// Only multiples of 10 between 0 and 100 are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transparency(u8);

impl Transparency {
    pub const STEP: u8 = 10;

    pub fn new(percent: u8) -> Result<Self, ArgParseErr> {
        if percent <= 100 && percent % Self::STEP == 0 {
            Ok(Self(percent))
        } else {
            Err(ArgParseErr::with_msg(format!(
                "invalid choice: {percent} (choose from {})",
                Self::choices()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )))
        }
    }

    pub fn choices() -> impl Iterator<Item = Transparency> {
        (0..=100).step_by(Self::STEP.into()).map(Transparency)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Opacity of the background as an alpha byte, rounded down.
    pub fn alpha(&self) -> u8 {
        ((100 - u32::from(self.0)) * 255 / 100) as u8
    }
}

impl Default for Transparency {
    fn default() -> Self {
        Self(40)
    }
}

impl Display for Transparency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Transparency {
    type Err = ArgParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percent: u8 = s
            .trim()
            .parse()
            .map_err(|_| ArgParseErr::with_msg(format!("invalid int value: `{s}'")))?;
        Self::new(percent)
    }
}

/// Adapter for clap's `value_parser`
pub fn parse_transparency(s: &str) -> Result<Transparency, String> {
    Transparency::from_str(s).map_err(|e| e.message.unwrap_or_else(|| s.to_owned()))
}

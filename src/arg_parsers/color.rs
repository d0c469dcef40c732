use std::{fmt::Display, str::FromStr};

use strum::{IntoStaticStr, VariantArray};

use crate::arg_parse_err::ArgParseErr;

/// Background color requested with `--color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// Equal intensity on all three channels
    Gray(u8),
    Rgb([u8; 3]),
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Gray(0)
    }
}

impl ColorSpec {
    pub fn to_rgb(&self) -> [u8; 3] {
        match *self {
            ColorSpec::Gray(v) => [v, v, v],
            ColorSpec::Rgb(rgb) => rgb,
        }
    }

    /// Malformed colors are not fatal: the caller gets black back
    /// together with the error so that it can be reported.
    pub fn parse_or_default(s: &str) -> (Self, Option<ArgParseErr>) {
        match Self::from_str(s) {
            Ok(color) => (color, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

impl Display for ColorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorSpec::Gray(v) => write!(f, "{v}"),
            ColorSpec::Rgb([r, g, b]) => write!(f, "({r}, {g}, {b})"),
        }
    }
}

impl FromStr for ColorSpec {
    type Err = ArgParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the first grammar that recognizes the shape of the input gets to decide
        for grammar in ColorGrammar::VARIANTS {
            if let Some(result) = grammar.try_match(s) {
                return result;
            }
        }
        Err(ArgParseErr::with_msg(format!("unrecognized color `{s}'")))
    }
}

/// The accepted color notations, in the order they are tried.
#[derive(IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ColorGrammar {
    Gray,
    Hex,
    Tuple,
}

impl ColorGrammar {
    /// Returns `None` if the input does not have the shape of this grammar at all,
    /// so that the next one can be tried.
    fn try_match(&self, s: &str) -> Option<Result<ColorSpec, ArgParseErr>> {
        match self {
            ColorGrammar::Gray => {
                let is_short_number =
                    (1..=3).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
                is_short_number.then(|| parse_gray(s))
            }
            ColorGrammar::Hex => (s.len() == 6).then(|| parse_hex(s)),
            ColorGrammar::Tuple => s
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .map(parse_tuple),
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            ColorGrammar::Gray => "0..255",
            ColorGrammar::Hex => "rrggbb",
            ColorGrammar::Tuple => "(r,g,b)",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            ColorGrammar::Gray => "gray intensity, values above 255 are clamped",
            ColorGrammar::Hex => "six hexadecimal digits",
            ColorGrammar::Tuple => "three integers, each clamped to 0..255",
        }
    }
}

fn parse_gray(s: &str) -> Result<ColorSpec, ArgParseErr> {
    // at most 3 digits, so this always fits
    let value: u16 = s.parse()?;
    Ok(ColorSpec::Gray(value.min(255) as u8))
}

fn parse_hex(s: &str) -> Result<ColorSpec, ArgParseErr> {
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ArgParseErr::with_msg(format!("invalid hex color `{s}'")));
    }
    let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16);
    Ok(ColorSpec::Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

fn parse_tuple(inner: &str) -> Result<ColorSpec, ArgParseErr> {
    let parts: Vec<&str> = inner.split(',').collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(ArgParseErr::with_msg(format!(
            "expected three comma-separated channels, got `({inner})'"
        )));
    };
    Ok(ColorSpec::Rgb([
        parse_channel(r)?,
        parse_channel(g)?,
        parse_channel(b)?,
    ]))
}

fn parse_channel(s: &str) -> Result<u8, ArgParseErr> {
    let value: i64 = s
        .trim()
        .parse()
        .map_err(|_| ArgParseErr::with_msg(format!("invalid channel value `{}'", s.trim())))?;
    Ok(value.clamp(0, 255) as u8)
}

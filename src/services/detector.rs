//! Classification of a single query token into one of the color notations.
//!
//! Grammars are tried in a fixed order (hex, rgb, vec3, hsl) and the first one
//! that matches with in-range values wins. A token whose syntax matches but
//! whose values are out of range falls through to the next grammar, and
//! finally to [`ParsedToken::Unrecognized`].

use color_model::Color;
use regex::Regex;
use std::sync::LazyLock;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid hex regex")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:rgb)?(?:\s+|\s*\())?\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)?$",
    )
    .expect("valid rgb regex")
});

static VEC3_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:vec3)?(?:\s+|\s*\())?\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*\)?$",
    )
    .expect("valid vec3 regex")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:hsl)?(?:\s+|\s*\())?\s*([0-9]*\.?[0-9]+)\s*,\s*([0-9]*\.?[0-9]+)\s*%\s*,\s*([0-9]*\.?[0-9]+)\s*%\s*\)?$",
    )
    .expect("valid hsl regex")
});

/// Result of classifying one token.
///
/// Each recognized variant carries the captured values, already checked
/// against the grammar's valid range.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedToken {
    /// Six lowercase hex digits (short form already expanded), no `#`
    Hex(String),
    Rgb([u8; 3]),
    /// Components in `0.0..=1.0`
    Vec3([f64; 3]),
    /// Hue in `0..=360`, saturation and lightness in `0..=100`
    Hsl([f64; 3]),
    Unrecognized,
}

impl ParsedToken {
    /// Convert the captured values to a color. `None` for unrecognized tokens.
    pub fn to_color(&self) -> Option<Color> {
        match self {
            ParsedToken::Hex(digits) => Color::from_hex(digits).ok(),
            ParsedToken::Rgb([r, g, b]) => Some(Color::from_rgb(*r, *g, *b)),
            ParsedToken::Vec3([r, g, b]) => Some(Color::from_vec3(*r, *g, *b)),
            ParsedToken::Hsl([h, s, l]) => Some(Color::from_hsl(*h, *s, *l)),
            ParsedToken::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ParsedToken::Unrecognized)
    }
}

/// Classify a token. Surrounding whitespace is ignored.
pub fn detect(token: &str) -> ParsedToken {
    let token = token.trim();

    detect_hex(token)
        .or_else(|| detect_rgb(token))
        .or_else(|| detect_vec3(token))
        .or_else(|| detect_hsl(token))
        .unwrap_or(ParsedToken::Unrecognized)
}

/// Convenience wrapper: classify and convert in one step.
pub fn parse_color(token: &str) -> Option<Color> {
    detect(token).to_color()
}

fn detect_hex(token: &str) -> Option<ParsedToken> {
    let caps = HEX_RE.captures(token)?;
    let digits = caps[1].to_ascii_lowercase();
    let digits = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits
    };
    Some(ParsedToken::Hex(digits))
}

fn detect_rgb(token: &str) -> Option<ParsedToken> {
    let caps = RGB_RE.captures(token)?;
    // Up to three ASCII digits always fit u16; values above 255 fall through
    let channel = |i: usize| caps[i].parse::<u16>().ok().and_then(|v| u8::try_from(v).ok());
    Some(ParsedToken::Rgb([channel(1)?, channel(2)?, channel(3)?]))
}

fn detect_vec3(token: &str) -> Option<ParsedToken> {
    let values = captured_floats(&VEC3_RE, token)?;
    values
        .iter()
        .all(|v| *v <= 1.0)
        .then_some(ParsedToken::Vec3(values))
}

fn detect_hsl(token: &str) -> Option<ParsedToken> {
    let [h, s, l] = captured_floats(&HSL_RE, token)?;
    (h <= 360.0 && s <= 100.0 && l <= 100.0).then_some(ParsedToken::Hsl([h, s, l]))
}

fn captured_floats(re: &Regex, token: &str) -> Option<[f64; 3]> {
    let caps = re.captures(token)?;
    let value = |i: usize| caps[i].parse::<f64>().ok();
    Some([value(1)?, value(2)?, value(3)?])
}

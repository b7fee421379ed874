//! Color tokens and their resolution into terminal styles.

use owo_colors::{AnsiColors, OwoColorize, Style};
use rand::Rng;
use thiserror::Error;

/// Colors accepted for the message border, besides `random` and `default`.
pub const BORDER_COLORS: &[(&str, AnsiColors)] = &[
    ("cyan", AnsiColors::Cyan),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("magenta", AnsiColors::Magenta),
    ("blue", AnsiColors::Blue),
    ("red", AnsiColors::Red),
    ("white", AnsiColors::White),
];

/// Colors accepted for the message text, besides `default`.
pub const TEXT_COLORS: &[(&str, AnsiColors)] = &[
    ("cyan", AnsiColors::Cyan),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("magenta", AnsiColors::Magenta),
    ("blue", AnsiColors::Blue),
    ("red", AnsiColors::Red),
    ("white", AnsiColors::White),
    ("gray", AnsiColors::BrightBlack),
];

/// An error for a color token that is neither a recognized name nor a hex
/// triplet/sextet.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("Invalid color. Valid options: {valid} or hex colors (e.g., #ff0000)")]
pub struct InvalidColor {
    valid: String,
}

/// A parsed color token.
///
/// Settings keep color tokens as plain strings; a token is parsed into a
/// `ColorSpec` either to validate user input before it is persisted, or to
/// resolve a concrete style at render time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSpec {
    /// The terminal's default color; no styling at all.
    Default,
    /// A fresh pick from [`BORDER_COLORS`] on every render.
    Random,
    Named(AnsiColors),
    Hex(u8, u8, u8),
}

impl ColorSpec {
    /// Parses a border color token: a named color, `random`, `default`, or a
    /// `#` hex value.
    pub fn parse_border(token: &str) -> Result<Self, InvalidColor> {
        if token == "random" {
            return Ok(Self::Random);
        }
        Self::parse(token, BORDER_COLORS).ok_or_else(|| InvalidColor {
            valid: options(BORDER_COLORS, &["random", "default"]),
        })
    }

    /// Parses a text color token. Same domain as the border plus `gray`,
    /// minus `random`.
    pub fn parse_text(token: &str) -> Result<Self, InvalidColor> {
        Self::parse(token, TEXT_COLORS).ok_or_else(|| InvalidColor {
            valid: options(TEXT_COLORS, &["default"]),
        })
    }

    fn parse(token: &str, named: &[(&str, AnsiColors)]) -> Option<Self> {
        if token == "default" {
            return Some(Self::Default);
        }
        if let Some((r, g, b)) = parse_hex(token) {
            return Some(Self::Hex(r, g, b));
        }
        named
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, color)| Self::Named(*color))
    }
}

fn options(named: &[(&str, AnsiColors)], extra: &[&str]) -> String {
    named
        .iter()
        .map(|(name, _)| *name)
        .chain(extra.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses `#rgb` or `#rrggbb` into its channels.
///
/// Three-digit values expand each nibble, so `#abc` means `#aabbcc`.
pub fn parse_hex(token: &str) -> Option<(u8, u8, u8)> {
    let digits = token.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let d: Vec<u8> = digits.bytes().map(nibble).map(|n| n << 4 | n).collect();
            Some((d[0], d[1], d[2]))
        }
        6 => {
            let d: Vec<u8> = digits.bytes().map(nibble).collect();
            Some((d[0] << 4 | d[1], d[2] << 4 | d[3], d[4] << 4 | d[5]))
        }
        _ => None,
    }
}

/// Converts an ASCII hex digit to its value. Only called on bytes that
/// already passed `is_ascii_hexdigit`.
fn nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

/// Picks a border color uniformly from the named set.
pub fn random_border_color() -> AnsiColors {
    BORDER_COLORS[rand::thread_rng().gen_range(0..BORDER_COLORS.len())].1
}

/// Resolves the style for the border glyphs. `None` leaves the terminal's
/// default color untouched.
pub fn border_style(spec: &ColorSpec) -> Option<Style> {
    match spec {
        ColorSpec::Default => None,
        ColorSpec::Random => Some(Style::new().color(random_border_color()).bold()),
        ColorSpec::Named(color) => Some(Style::new().color(*color).bold()),
        ColorSpec::Hex(r, g, b) => Some(Style::new().truecolor(*r, *g, *b).bold()),
    }
}

/// Resolves the style for the message text. Text is never bold and never
/// random.
pub fn text_style(spec: &ColorSpec) -> Option<Style> {
    match spec {
        ColorSpec::Default | ColorSpec::Random => None,
        ColorSpec::Named(color) => Some(Style::new().color(*color)),
        ColorSpec::Hex(r, g, b) => Some(Style::new().truecolor(*r, *g, *b)),
    }
}

/// Applies `style` to `text`, or returns the text untouched for the terminal
/// default.
pub fn paint(text: &str, style: Option<Style>) -> String {
    match style {
        Some(style) => text.style(style).to_string(),
        None => text.to_string(),
    }
}

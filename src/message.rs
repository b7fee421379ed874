//! Rendering the startup message from a [`Settings`] record.

use crate::{
    store::Settings,
    style::{self, ColorSpec},
};

/// Shown until the user sets a custom message.
pub const DEFAULT_MESSAGE: &str = "Live where your feet are";

const PADDING: &str = "    ";

/// The message to display: the custom one when set, the default otherwise.
pub fn resolve_message(settings: &Settings) -> &str {
    if settings.custom_message.is_empty() {
        DEFAULT_MESSAGE
    } else {
        &settings.custom_message
    }
}

/// Renders the message for the given settings.
///
/// Returns `None` when messages are disabled. With `colorful` off the text is
/// returned bare; otherwise it is styled and, with `border` on, framed in a
/// box whose horizontal edge spans the message length plus the padding.
/// Unrecognized stored color values fall back to the terminal default.
pub fn render(settings: &Settings) -> Option<String> {
    if !settings.enabled {
        return None;
    }

    let message = resolve_message(settings);

    if !settings.colorful {
        return Some(format!("\n{message}\n"));
    }

    let border_spec =
        ColorSpec::parse_border(&settings.border_color).unwrap_or(ColorSpec::Default);
    let text_spec = ColorSpec::parse_text(&settings.text_color).unwrap_or(ColorSpec::Default);
    let border = style::border_style(&border_spec);
    let text = style::paint(message, style::text_style(&text_spec));

    if !settings.border {
        return Some(format!("\n{text}\n"));
    }

    let width = message.chars().count() + 2 * PADDING.len();
    let top = style::paint(&format!("╔{}╗", "═".repeat(width)), border);
    let bottom = style::paint(&format!("╚{}╝", "═".repeat(width)), border);
    let side = style::paint("║", border);

    Some(format!(
        "\n{top}\n{side}{PADDING}{text}{PADDING}{side}\n{bottom}\n"
    ))
}

/// Prints the rendered message to stdout, or nothing when disabled.
pub fn display(settings: &Settings) {
    if let Some(text) = render(settings) {
        println!("{text}");
    }
}

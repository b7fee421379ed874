//! `prelude`'s configuration.
use clap::{Parser, Subcommand};
use figment::{providers::Serialized, Figment};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::{
    message::{self, DEFAULT_MESSAGE},
    store::{self, Settings},
    style::ColorSpec,
};

const HELP_EPILOGUE: &str = "\
Colors:
  Border: cyan, green, yellow, magenta, blue, red, white, random, default
  Text: cyan, green, yellow, magenta, blue, red, white, gray, default
  Hex colors: #ff0000, #00ff00, #0000ff, etc.

  'default' uses your terminal's theme colors

Examples:
  prelude set \"Code with confidence\"
  prelude border cyan
  prelude border #ff0000
  prelude text white
  prelude text #00ff00
  prelude reset

Configuration stored in: ~/.prelude/";

/// `prelude`'s configuration.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
#[command(author, version, about, long_about = None, after_help = HELP_EPILOGUE)]
pub struct Config {
    /// `prelude`'s commands.
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

/// `prelude`'s commands. Without one, the current message is displayed.
#[derive(Debug, Clone, Subcommand, Serialize, Deserialize)]
pub enum Commands {
    /// Set your custom message.
    #[command(name = "set")]
    Set {
        /// The message, joined from the remaining arguments.
        message: Vec<String>,
    },

    /// Reset to the default message.
    #[command(name = "reset")]
    Reset,

    /// Set the border color.
    #[command(name = "border")]
    Border {
        /// A named color, `random`, `default`, or a hex value like `#ff0000`.
        color: Option<String>,
    },

    /// Set the text color.
    #[command(name = "text")]
    Text {
        /// A named color, `default`, or a hex value like `#ff0000`.
        color: Option<String>,
    },

    /// Show current settings.
    #[command(name = "config")]
    Show,

    /// Enable messages on startup.
    #[command(name = "enable")]
    Enable,

    /// Disable messages on startup.
    #[command(name = "disable")]
    Disable,

    /// Anything unrecognized falls through to displaying the message.
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Main entrypoint of `prelude`'s execution.
///
/// Every handled path exits cleanly: storage failures and invalid input are
/// printed diagnostics, not process failures.
pub fn run() -> anyhow::Result<()> {
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::parse()))
        .extract()?;

    match config.command {
        None | Some(Commands::Other(_)) => message::display(&store::load()),
        Some(Commands::Enable) => set_enabled(true),
        Some(Commands::Disable) => set_enabled(false),
        Some(Commands::Set { message }) => set_custom_message(&message.join(" ")),
        Some(Commands::Reset) => reset_message(),
        Some(Commands::Border { color }) => match color {
            Some(color) => set_border_color(&color),
            None => print_border_usage(),
        },
        Some(Commands::Text { color }) => match color {
            Some(color) => set_text_color(&color),
            None => print_text_usage(),
        },
        Some(Commands::Show) => show_config(),
    }

    Ok(())
}

fn set_enabled(enabled: bool) {
    let mut settings = store::load();
    settings.enabled = enabled;
    if store::save(&settings) {
        let state = if enabled { "enabled" } else { "disabled" };
        println!(
            "{}",
            format!("Prelude messages {state} successfully!").green()
        );
    }
}

fn set_custom_message(text: &str) {
    if text.is_empty() {
        println!("Usage: prelude set \"Your custom message here\"");
        return;
    }
    let mut settings = store::load();
    settings.custom_message = text.to_string();
    if store::save(&settings) {
        println!("{}", "Custom message set successfully!".green());
        preview(&settings);
    }
}

fn reset_message() {
    let mut settings = store::load();
    settings.custom_message.clear();
    if store::save(&settings) {
        println!("{}", "Reset to default message!".green());
        preview(&settings);
    }
}

fn set_border_color(color: &str) {
    // Validation comes first: rejected input leaves the settings untouched.
    if let Err(err) = ColorSpec::parse_border(color) {
        println!("{}", err.to_string().red());
        return;
    }
    let mut settings = store::load();
    settings.border_color = color.to_string();
    if store::save(&settings) {
        println!("{}", format!("Border color set to {color}!").green());
        preview(&settings);
    }
}

fn set_text_color(color: &str) {
    if let Err(err) = ColorSpec::parse_text(color) {
        println!("{}", err.to_string().red());
        return;
    }
    let mut settings = store::load();
    settings.text_color = color.to_string();
    if store::save(&settings) {
        println!("{}", format!("Text color set to {color}!").green());
        preview(&settings);
    }
}

fn preview(settings: &Settings) {
    println!("{}", "Preview:".bright_black());
    message::display(settings);
}

fn show_config() {
    let settings = store::load();
    println!("\n{}", "Current Configuration:".blue().bold());
    println!("{}", "━".repeat(30).bright_black());

    let enabled = if settings.enabled {
        "Yes".green().to_string()
    } else {
        "No".red().to_string()
    };
    println!("{} {enabled}", "Enabled:".white());

    let current = if settings.custom_message.is_empty() {
        format!("\"{DEFAULT_MESSAGE}\" (default)")
            .bright_black()
            .to_string()
    } else {
        settings.custom_message.italic().to_string()
    };
    println!("{} {current}", "Current Message:".white());

    println!("{} {}", "Border Color:".white(), settings.border_color);
    println!("{} {}", "Text Color:".white(), settings.text_color);
    println!(
        "{} {}",
        "Colorful:".white(),
        if settings.colorful { "Yes" } else { "No" }
    );
    println!(
        "{} {}",
        "Border:".white(),
        if settings.border { "Yes" } else { "No" }
    );
    println!();
}

fn print_border_usage() {
    println!("Usage: prelude border <color>");
    println!("Colors: cyan, green, yellow, magenta, blue, red, white, random, default");
    println!("Hex colors: #ff0000, #00ff00, #0000ff, etc.");
}

fn print_text_usage() {
    println!("Usage: prelude text <color>");
    println!("Colors: cyan, green, yellow, magenta, blue, red, white, gray, default");
    println!("Hex colors: #ff0000, #00ff00, #0000ff, etc.");
}

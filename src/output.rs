//! # Output Configuration
//!
//! Controls how the CLI renders listings and status lines: whether colours
//! and symbols are used, and how names are styled.
//!
//! The following environment variables and flags are respected:
//! - `--color=never|always|auto`
//! - `NO_COLOR` disables colours when set (per https://no-color.org/)
//! - `CLICOLOR=0` disables colours
//! - `CLICOLOR_FORCE=1` forces colours even in non-TTY
//! - `TERM=dumb` disables colours

use std::env;

use clap::ValueEnum;
use console::Style;

/// Value of the `--color` flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration for colours and symbols.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// `Always` overrides `NO_COLOR`; `Auto` inspects the environment and
    /// whether stdout is a terminal.
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // Presence alone disables colours, even if empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Whether an interactive spinner should be drawn.
    pub fn show_progress(&self) -> bool {
        self.use_color && console::Term::stderr().is_term()
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.use_color {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Section heading, e.g. `Services:`.
    pub fn heading(&self, text: &str) -> String {
        self.paint(Style::new().bold().underlined(), text)
    }

    /// A resource name.
    pub fn name(&self, text: &str) -> String {
        self.paint(Style::new().cyan(), text)
    }

    /// Secondary detail such as a registry name.
    pub fn dim(&self, text: &str) -> String {
        self.paint(Style::new().dim(), text)
    }

    pub fn success(&self, text: &str) -> String {
        format!("{} {}", self.symbol("✔", "[OK]"), self.paint(Style::new().green(), text))
    }

    pub fn failure(&self, text: &str) -> String {
        format!("{} {}", self.symbol("✖", "[ERR]"), self.paint(Style::new().red(), text))
    }

    /// `fancy` when colours are on, `plain` otherwise.
    pub fn symbol<'a>(&self, fancy: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            fancy
        } else {
            plain
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

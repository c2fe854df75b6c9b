//! Centralized shell output.
//!
//! All human-facing status lines go through [`Shell`] so commands never deal
//! with alignment or colors directly. Status lines go to stderr; stdout is
//! left for machine-readable output such as include lists.

use std::fmt::Display;
use std::io::{self, IsTerminal};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: no status output
    Quiet,
    #[default]
    Normal,
    /// --verbose: also enables debug logging
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success statuses (green)
    Created,
    Finished,

    // In-progress statuses (cyan)
    Scanning,

    // Info statuses (blue)
    Info,

    // Warning statuses (yellow)
    Missing,
    Warning,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Created => "Created",
            Status::Finished => "Finished",
            Status::Scanning => "Scanning",
            Status::Info => "Info",
            Status::Missing => "Missing",
            Status::Warning => "Warning",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            Status::Created | Status::Finished => "\x1b[1;32m",
            Status::Scanning => "\x1b[1;36m",
            Status::Info => "\x1b[1;34m",
            Status::Missing | Status::Warning => "\x1b[1;33m",
        }
    }
}

/// Width status words are right-aligned to.
const STATUS_WIDTH: usize = 12;

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
}

impl Shell {
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
        }
    }

    /// Create a shell from CLI flags. Quiet wins over verbose.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Shell::new(verbosity, color)
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Print a status message.
    ///
    /// Format: `{status:>12} {message}`. Nothing prints in quiet mode;
    /// errors are reported by `main`.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.is_quiet() {
            return;
        }
        eprintln!("{} {}", self.format_status(status), msg);
    }

    /// Print an info message.
    pub fn note(&self, msg: impl Display) {
        self.status(Status::Info, msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: impl Display) {
        self.status(Status::Warning, msg);
    }

    /// Print a free-form line with no status prefix (banners, hints).
    pub fn print(&self, msg: impl Display) {
        if !self.is_quiet() {
            eprintln!("{}", msg);
        }
    }

    /// Format a status prefix with optional color.
    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();
        if self.use_color {
            format!(
                "{}{:>width$}\x1b[0m",
                status.color_code(),
                text,
                width = STATUS_WIDTH
            )
        } else {
            format!("{:>width$}", text, width = STATUS_WIDTH)
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Verbosity::Normal, ColorChoice::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_choice_parse() {
        assert_eq!("auto".parse::<ColorChoice>().unwrap(), ColorChoice::Auto);
        assert_eq!("ALWAYS".parse::<ColorChoice>().unwrap(), ColorChoice::Always);
        assert_eq!("never".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        assert!("sometimes".parse::<ColorChoice>().is_err());
    }

    #[test]
    fn test_from_flags_quiet_wins() {
        let shell = Shell::from_flags(true, true, ColorChoice::Never);
        assert!(shell.is_quiet());
    }

    #[test]
    fn test_format_status_alignment() {
        let shell = Shell::new(Verbosity::Normal, ColorChoice::Never);
        assert_eq!(shell.format_status(Status::Created), "     Created");
        assert_eq!(shell.format_status(Status::Warning), "     Warning");
    }

    #[test]
    fn test_format_status_color() {
        let shell = Shell::new(Verbosity::Normal, ColorChoice::Always);
        let formatted = shell.format_status(Status::Finished);
        assert!(formatted.starts_with("\x1b[1;32m"));
        assert!(formatted.ends_with("\x1b[0m"));
    }
}

//! Command-line argument parsing.

use crate::app::Screen;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI, optionally starting on a specific tree
    Run { screen: Option<Screen> },
    /// Arguments could not be understood
    Invalid(String),
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: hooks-deck [--tree <practice|concepts>]

Options:
  --tree <name>   Start on the given view tree (default: practice)
  -h, --help      Print this help
  -V, --version   Print version

Keys:
  F1/F2 or Ctrl+Left/Right  switch tree
  Tab/Shift+Tab             move focus
  Enter/Space               press focused button
  Esc                       clear focus
  PageUp/PageDown           scroll
  Ctrl+C / Ctrl+Q           quit";

/// Parse command-line arguments (including the program name).
///
/// # Examples
///
/// ```
/// use hooks_deck::app::Screen;
/// use hooks_deck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["hooks-deck".to_string(), "--tree".to_string(), "concepts".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Run { screen: Some(Screen::Concepts) }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut screen = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--tree" => match args.next() {
                Some(name) => match name.parse::<Screen>() {
                    Ok(parsed) => screen = Some(parsed),
                    Err(e) => return CliCommand::Invalid(e),
                },
                None => return CliCommand::Invalid("--tree requires a value".to_string()),
            },
            other => {
                if let Some(name) = other.strip_prefix("--tree=") {
                    match name.parse::<Screen>() {
                        Ok(parsed) => screen = Some(parsed),
                        Err(e) => return CliCommand::Invalid(e),
                    }
                } else {
                    return CliCommand::Invalid(format!("unexpected argument '{}'", other));
                }
            }
        }
    }

    CliCommand::Run { screen }
}

//! Type definitions for the application state.
//!
//! - [`Screen`] - Which demo tree is currently displayed
//! - [`FetchOutcome`] - Result of the most recent fetch

use std::fmt;
use std::str::FromStr;

use crate::traits::HttpError;

/// Represents which tree is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Practice,
    Concepts,
}

impl Screen {
    /// Every screen in tab order.
    pub const ALL: [Screen; 2] = [Screen::Practice, Screen::Concepts];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Practice => "Practice",
            Screen::Concepts => "Concepts",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Practice => 0,
            Screen::Concepts => 1,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Practice => write!(f, "practice"),
            Screen::Concepts => write!(f, "concepts"),
        }
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "practice" => Ok(Screen::Practice),
            "concepts" => Ok(Screen::Concepts),
            other => Err(format!(
                "unknown tree '{}' (expected practice or concepts)",
                other
            )),
        }
    }
}

/// What the last completed fetch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Succeeded { url: String, body: String },
    Failed { url: String, error: HttpError },
}

impl FetchOutcome {
    pub fn url(&self) -> &str {
        match self {
            FetchOutcome::Succeeded { url, .. } | FetchOutcome::Failed { url, .. } => url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Succeeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_cycles() {
        assert_eq!(Screen::Practice.next(), Screen::Concepts);
        assert_eq!(Screen::Concepts.next(), Screen::Practice);
        assert_eq!(Screen::Practice.prev(), Screen::Concepts);
    }

    #[test]
    fn test_screen_parse() {
        assert_eq!("Practice".parse::<Screen>(), Ok(Screen::Practice));
        assert_eq!(" concepts ".parse::<Screen>(), Ok(Screen::Concepts));
        assert!("hooks".parse::<Screen>().is_err());
        assert_eq!(Screen::Concepts.to_string(), "concepts");
    }
}

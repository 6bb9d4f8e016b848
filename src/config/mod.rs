//! Session configuration.
//!
//! Read from `config.txt` in the data directory, one `key=value` per line.
//! Recognized keys are `spacing` (`single` or `double`) and `spinner`
//! (a named style or `random`). Anything else is ignored so the file can
//! carry keys this build does not know about.

use serde::{Deserialize, Serialize};

/// Paragraph spacing used when rendering an article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spacing {
    Single,
    Double,
}

impl Spacing {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "single" => Some(Spacing::Single),
            "double" => Some(Spacing::Double),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub spacing: Spacing,
    /// Spinner style name, or `random` to pick one per session.
    pub spinner: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacing: Spacing::Single,
            spinner: "random".to_string(),
        }
    }
}

impl Config {
    /// Parses `key=value` lines, splitting on the first `=` and trimming
    /// both sides. Lines without `=` and unrecognized keys or values are
    /// skipped; parsing never fails.
    pub fn parse(content: &str) -> Self {
        let mut config = Config::default();

        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "spacing" => match Spacing::parse(value) {
                    Some(spacing) => config.spacing = spacing,
                    None => {
                        tracing::debug!(value, "ignoring unrecognized spacing value");
                    }
                },
                "spinner" => config.spinner = value.to_string(),
                _ => {
                    tracing::debug!(key, "ignoring unrecognized config key");
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.spacing, Spacing::Single);
        assert_eq!(config.spinner, "random");
    }

    #[test]
    fn test_parse_spacing_and_spinner() {
        let config = Config::parse("spacing=double\nspinner=moon\n");
        assert_eq!(config.spacing, Spacing::Double);
        assert_eq!(config.spinner, "moon");
    }

    #[test]
    fn test_parse_trims_both_sides() {
        let config = Config::parse("  spacing =  double  \n");
        assert_eq!(config.spacing, Spacing::Double);
    }

    #[test]
    fn test_lines_without_equals_yield_defaults() {
        let content = "this file has\nno key value pairs at all\n";
        let config = Config::parse(content);
        assert_eq!(config.spacing, Spacing::Single);
        assert_eq!(config.spinner, "random");
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let config = Config::parse("theme=gruvbox\nspacing=double\n");
        assert_eq!(config.spacing, Spacing::Double);
    }

    #[test]
    fn test_bad_spacing_value_keeps_default() {
        let config = Config::parse("spacing=triple\n");
        assert_eq!(config.spacing, Spacing::Single);
    }

    #[test]
    fn test_value_may_contain_equals() {
        let config = Config::parse("spinner=a=b\n");
        assert_eq!(config.spinner, "a=b");
    }
}

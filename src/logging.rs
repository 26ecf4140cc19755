//! Tracing setup
//!
//! Events go to stderr. The filter comes from `HANGMAN_LOG` when set,
//! otherwise from the verbosity flag.

use anyhow::Result;
use tracing::{trace, warn};
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "HANGMAN_LOG";

/// Filter directive used when `HANGMAN_LOG` is unset or invalid
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "hangman=debug" } else { "warn" }
}

/// Filter built from an optional user directive
///
/// `rejected` holds the parse error when the directive was invalid and the
/// verbosity default was used instead.
#[derive(Debug)]
pub struct FilterSelection {
    pub filter: EnvFilter,
    pub rejected: Option<ParseError>,
}

/// Parse `directive`, falling back to the verbosity default
///
/// # Errors
/// Returns an error if the default directive does not parse.
pub fn build_filter(directive: Option<&str>, verbose: bool) -> Result<FilterSelection> {
    let rejected = match directive.map(EnvFilter::try_new) {
        Some(Ok(filter)) => {
            return Ok(FilterSelection {
                filter,
                rejected: None,
            });
        }
        Some(Err(err)) => Some(err),
        None => None,
    };

    Ok(FilterSelection {
        filter: EnvFilter::try_new(default_directive(verbose))?,
        rejected,
    })
}

/// Install the global subscriber
///
/// An invalid `HANGMAN_LOG` is reported with a warning once the subscriber is
/// up.
///
/// # Errors
/// Returns an error if the default filter is invalid or a subscriber is
/// already set.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let directive = std::env::var(LOG_ENV).ok();
    let selection = build_filter(directive.as_deref(), verbose)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(selection.filter)
        .try_init()?;

    if let Some(err) = selection.rejected {
        warn!(
            directive = directive.as_deref().unwrap_or_default(),
            fallback = default_directive(verbose),
            %err,
            "ignoring invalid HANGMAN_LOG filter"
        );
    }

    trace!("tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        assert!(EnvFilter::try_new(default_directive(false)).is_ok());
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "hangman=debug");
    }

    #[test]
    fn valid_directive_is_used() {
        let selection = build_filter(Some("hangman=trace"), false).unwrap();
        assert!(selection.rejected.is_none());
    }

    #[test]
    fn missing_directive_uses_default() {
        let selection = build_filter(None, true).unwrap();
        assert!(selection.rejected.is_none());
    }

    #[test]
    fn invalid_directive_is_reported() {
        let selection = build_filter(Some("hangman=loud"), false).unwrap();
        assert!(selection.rejected.is_some());
    }
}

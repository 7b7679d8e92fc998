use std::sync::Once;

use expense_config::Config;
use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    fmt, EnvFilter,
};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber. `directive` is added on top of `RUST_LOG`;
/// an unparsable directive is replaced by [`Config::default_log_filter`].
pub fn init_tracing(directive: &str) {
    TRACING_INIT.call_once(|| {
        let (parsed, rejected) = resolve_directive(directive);
        let filter = EnvFilter::from_default_env().add_directive(parsed);

        // Another subscriber may already be installed by the embedding application.
        let _ = fmt().with_env_filter(filter).try_init();

        if let Some(reason) = rejected {
            tracing::warn!(directive, %reason, "invalid log directive, using default filter");
        }
    });
}

/// Parses `directive`, falling back to the default filter and returning the parse error.
pub(crate) fn resolve_directive(directive: &str) -> (Directive, Option<String>) {
    match directive.parse::<Directive>() {
        Ok(parsed) => (parsed, None),
        Err(err) => (default_directive(), Some(err.to_string())),
    }
}

fn default_directive() -> Directive {
    Config::default_log_filter()
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directive_is_kept() {
        let (parsed, rejected) = resolve_directive("expense_tracker=debug");
        assert_eq!(parsed.to_string(), "expense_tracker=debug");
        assert!(rejected.is_none());
    }

    #[test]
    fn invalid_directive_falls_back_to_default_filter() {
        let (parsed, rejected) = resolve_directive("expense_tracker=loud");
        assert_eq!(parsed.to_string(), Config::default_log_filter());
        assert!(rejected.is_some());
    }
}

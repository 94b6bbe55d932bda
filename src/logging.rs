// SPDX-License-Identifier: MPL-2.0
//! Logging setup for the desktop binary.
//!
//! Filtering follows `LEXFOLIO_LOG`, then `RUST_LOG`, then a default that
//! keeps third-party crates quiet. Panics are routed through `tracing` so they
//! land next to the rest of the log.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const ENV_LOG: &str = "LEXFOLIO_LOG";

/// Filter used when neither variable is set.
#[must_use]
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "lexfolio=debug,warn"
    } else {
        "lexfolio=info,warn"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber and the panic hook.
pub fn init(verbose: bool) {
    let installed = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
    if installed.is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|location| format!("{}:{}", location.file(), location.line()))
            .unwrap_or_default();
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_default();
        tracing::error!(%location, %payload, "unrecoverable failure");
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_own_level_only() {
        assert!(default_directives(true).starts_with("lexfolio=debug"));
        assert!(default_directives(false).starts_with("lexfolio=info"));
        assert!(default_directives(true).ends_with(",warn"));
    }

    #[test]
    fn default_directives_parse() {
        assert!(EnvFilter::try_new(default_directives(false)).is_ok());
        assert!(EnvFilter::try_new(default_directives(true)).is_ok());
    }
}

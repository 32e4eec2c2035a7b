//! Logging setup and helpers shared by the geminibot crates.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Dependency targets that are far too chatty at `info`/`debug`.
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls"];

/// Build the filter used by [`init_logging`].
///
/// `RUST_LOG` wins when set. Otherwise the level is `info`, or `debug` when
/// `verbose` is requested, with the HTTP stack held at `warn` either way.
pub fn build_filter(verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if verbose { "debug" } else { "info" };
    let mut directives = vec![level.to_string()];
    directives.extend(QUIET_TARGETS.iter().map(|target| format!("{}=warn", target)));

    EnvFilter::new(directives.join(","))
}

/// Install the global tracing subscriber.
pub fn init_logging(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Mask a credential for display, keeping only a short prefix.
pub fn redact_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<empty>".to_string();
    }
    let visible = (secret.chars().count() / 4).min(6);
    format!("{}***", secret.chars().take(visible).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(safe_truncate("hello", 10), "hello");
        assert_eq!(safe_truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let text = "привет, мир";
        let truncated = safe_truncate(text, 7);
        assert_eq!(truncated, "прив...");
        assert_eq!(truncated.chars().count(), 7);
    }

    #[test]
    fn truncate_with_tiny_limit() {
        assert_eq!(safe_truncate("abcdef", 2), "...");
    }

    #[test]
    fn redact_hides_most_of_the_secret() {
        let redacted = redact_secret("123456:ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(redacted, "123456***");
        assert!(!redacted.contains("ABC"));

        assert_eq!(redact_secret("abcd"), "a***");
        assert_eq!(redact_secret(""), "<empty>");
    }

    #[test]
    fn verbose_filter_enables_debug() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter(true).to_string();
        assert!(filter.contains("debug"));
        assert!(filter.contains("reqwest=warn"));
    }
}

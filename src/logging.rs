// src/logging.rs
// =============================================================================
// Log setup. Everything goes to stderr so stdout stays clean for the report
// (and for --json output in particular).
//
// RUST_LOG wins when set; otherwise the level comes from -v flags:
//   (none) -> warn
//   -v     -> info
//   -vv    -> debug
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "link_verifier=warn");
        assert_eq!(default_directive(1), "link_verifier=info");
        assert_eq!(default_directive(5), "link_verifier=debug");
    }
}

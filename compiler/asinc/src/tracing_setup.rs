//! Tracing subscriber for the `asin` binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the subscriber once per process.
///
/// Nothing is installed unless `ASIN_LOG` (or `RUST_LOG`) holds a filter,
/// e.g. `ASIN_LOG=asin_eval=debug`. `ASIN_LOG_TREE=1` swaps the flat
/// formatter for an indented span tree. Output goes to stderr so logs never
/// mix with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = env_filter() else {
            return;
        };
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var("ASIN_LOG_TREE").is_ok_and(|v| v == "1") {
            registry
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    });
}

fn env_filter() -> Option<EnvFilter> {
    ["ASIN_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
}

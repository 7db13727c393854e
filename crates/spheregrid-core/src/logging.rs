#![forbid(unsafe_code)]

//! Logging facade.
//!
//! Library crates log through the [`tracing`] macros re-exported here so the
//! dependency version stays pinned in one place. Binaries and tests that want
//! output install a subscriber with [`init_subscriber`] (feature
//! `tracing-json`); the filter is read from `RUST_LOG` and defaults to `info`.

pub use tracing::{debug, debug_span, error, info, info_span, trace, warn};

/// Install a global fmt subscriber.
///
/// With `json = true` events are emitted as one JSON object per line. Returns
/// `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_subscriber(json: bool) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

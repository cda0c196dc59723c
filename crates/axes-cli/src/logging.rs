//! Logging initialization
//!
//! One entry point, called once by the binary. Library crates only emit
//! `tracing` events; nothing below this layer installs a subscriber.

use serde::{Deserialize, Serialize};
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output, `axes=debug`
    #[default]
    Development,
    /// JSON lines, `axes=info`
    Production,
    /// Subscriber with no output layer
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset
    ///
    /// `Test` installs no output layer, so its filter is `off`.
    #[must_use]
    pub const fn default_filter(self) -> &'static str {
        match self {
            Self::Development => "axes=debug",
            Self::Production => "axes=info",
            Self::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(profile.default_filter()))
}

/// Install the global subscriber for `profile`
///
/// Only the first call has an effect. Output goes to stderr so stdout stays
/// clean for query results.
///
/// # Example
///
/// ```
/// use axes_cli::logging::{init, Profile};
///
/// init(Profile::Test);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        // try_init: a subscriber installed by an embedding host wins
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(env_filter(profile))
                .with_writer(std::io::stderr)
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter(profile))
                .with_writer(std::io::stderr)
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
        if installed.is_ok() {
            tracing::debug!("logging initialised with {:?} profile", profile);
        }
    });
}

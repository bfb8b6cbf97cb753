//! Tracing setup for the `sectionist` binary.
//!
//! Filter directives come from `SECTIONIST_LOG`, falling back to `RUST_LOG`,
//! then to `warn`. Output goes to stderr so stdout stays clean for JSON.
//!
//! ```bash
//! SECTIONIST_LOG=debug sectionist contacts.json
//! SECTIONIST_LOG="sectionist_core::classification=trace" sectionist contacts.json
//! ```

use tracing_subscriber::EnvFilter;

/// Parse `SECTIONIST_LOG` directives. Invalid directives are reported on
/// stderr and ignored.
fn sectionist_filter(directives: Option<&str>) -> Option<EnvFilter> {
    let directives = directives?;
    match EnvFilter::try_new(directives) {
        Ok(filter) => Some(filter),
        Err(err) => {
            eprintln!(
                "sectionist: ignoring invalid SECTIONIST_LOG '{}': {}",
                directives, err
            );
            None
        }
    }
}

/// Build the filter from `SECTIONIST_LOG`, then `RUST_LOG`, then `warn`
fn env_filter() -> EnvFilter {
    sectionist_filter(std::env::var("SECTIONIST_LOG").ok().as_deref())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Install the global subscriber
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

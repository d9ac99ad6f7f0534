#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Shared test setup for the tare crates.
//!
//! Annotate tests with [`test`] instead of `#[test]` to get the engines'
//! trace output on failure. Filter it with `TARE_LOG`, which takes
//! `tracing_subscriber` target directives such as `tare=debug`. Without it,
//! the tare crates log at trace level and everything else at warn.

pub use tare_testhelpers_macros::test;

use std::sync::{Once, OnceLock};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Crates whose events are shown when `TARE_LOG` is unset.
const TARE_TARGETS: &[&str] = &["tare", "tare_core", "tare_json"];

static STARTED: OnceLock<Instant> = OnceLock::new();
static INSTALL: Once = Once::new();

/// Seconds since the first [`setup`] call in this test binary.
struct SinceSetup;

impl FormatTime for SinceSetup {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = STARTED.get_or_init(Instant::now).elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

fn filter() -> Targets {
    if let Some(targets) = std::env::var("TARE_LOG")
        .ok()
        .and_then(|directives| directives.parse::<Targets>().ok())
    {
        return targets;
    }
    TARE_TARGETS
        .iter()
        .fold(Targets::new().with_default(Level::WARN), |targets, target| {
            targets.with_target(*target, Level::TRACE)
        })
}

fn install() {
    STARTED.get_or_init(Instant::now);

    // another subscriber may already be installed by the test binary
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_ansi(true)
                .with_timer(SinceSetup)
                .with_target(false)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .with(filter())
        .try_init();
}

/// Installs the global tracing subscriber, once per test binary.
pub fn setup() {
    INSTALL.call_once(install);
}

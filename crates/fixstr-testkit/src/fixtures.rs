//! Test fixtures and helpers.
//!
//! Common capacities and setup code for tests across the workspace.

use fixstr::FixedString;
use tracing_subscriber::EnvFilter;

/// Tiny capacity, handy for forcing overflow.
pub type SmallString = FixedString<2>;

/// Typical capacity.
pub type String40 = FixedString<40>;

/// Large capacity, for cross-capacity checks.
pub type LongString = FixedString<128>;

/// Install a tracing subscriber that writes through the test harness.
///
/// Honors `RUST_LOG` (e.g. `RUST_LOG=fixstr=debug` shows overflow events).
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A string filled to capacity with `byte`.
pub fn filled<const N: usize>(byte: u8) -> FixedString<N> {
    let mut s = FixedString::new();
    while s.push(byte).is_ok() {}
    s
}

/// A string holding the repeating digits `0123456789...`, `len` bytes long
/// (capped at capacity).
pub fn digits<const N: usize>(len: usize) -> FixedString<N> {
    let mut s = FixedString::new();
    for i in 0..len.min(N) {
        let _ = s.push(b'0' + (i % 10) as u8);
    }
    s
}

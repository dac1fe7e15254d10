//! Process-wide logging setup for binaries and tools embedding the inventory model.

/// Initialize tracing/logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

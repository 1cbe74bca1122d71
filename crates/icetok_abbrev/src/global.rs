//! Process-wide abbreviation table singleton.
//!
//! [`initialize`] is the once-cell; [`add_config`] is the pre-init
//! registration hook, letting a caller layer a fresh configuration in
//! before the first [`initialize`] call.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use icetok_diagnostic::ConfigError;

use crate::table::AbbrevTable;

static PENDING_EXTRA_CONFIG: Mutex<Vec<String>> = Mutex::new(Vec::new());
static TABLE: OnceCell<AbbrevTable> = OnceCell::new();

/// Queues an additional abbreviation config document to be merged into
/// the default table on first [`initialize`] call. Validated eagerly so
/// a malformed document is reported at registration time, not silently
/// swallowed at init.
///
/// If the table has already been initialized, this has no effect — it is
/// too late to influence a completed initialization, matching "only one
/// initialization runs to completion".
///
/// # Errors
///
/// Returns [`ConfigError`] if `source` itself is malformed.
pub fn add_config(source: &str) -> Result<(), ConfigError> {
    // Eagerly validate so callers see a parse error immediately.
    let _ = crate::config::parse(source)?;
    if TABLE.get().is_none() {
        PENDING_EXTRA_CONFIG.lock().push(source.to_string());
    }
    Ok(())
}

/// Returns the process-wide abbreviation table, building it on first call
/// from the default table plus any [`add_config`]-registered extras (in
/// registration order; conflicting entries across sources are reported
/// via `tracing::warn!` and the later entry is skipped, since this path
/// cannot return a `Result` to a caller that only wants a read-only
/// reference).
#[must_use]
pub fn initialize() -> &'static AbbrevTable {
    TABLE.get_or_init(|| {
        tracing::debug!("initializing default abbreviation table");
        let mut table = AbbrevTable::default_table();
        let pending = PENDING_EXTRA_CONFIG.lock();
        for source in pending.iter() {
            match AbbrevTable::from_str(source) {
                Ok(extra) => {
                    if let Err(err) = table.merge(extra) {
                        tracing::warn!(%err, "skipping conflicting abbreviation config entry");
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "skipping invalid queued abbreviation config");
                }
            }
        }
        table
    })
}

#[cfg(test)]
mod tests {
    // These tests share process-global state, so they run in one thread
    // (default `cargo test` behavior is per-binary parallel by-test, not
    // by-module) — keep assertions tolerant of ordering with other tests
    // in this crate by only asserting presence, never absence.
    use super::*;

    #[test]
    fn initialize_is_idempotent() {
        let a = initialize();
        let b = initialize();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn default_entries_are_reachable_through_global() {
        let table = initialize();
        assert!(table.has_meaning("kr."));
    }
}

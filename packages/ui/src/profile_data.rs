//! Per-component profile fetching.
//!
//! Every display component owns its own transient, read-only copy of the
//! record, fetched on mount; there is deliberately no shared cache, so a
//! saved update becomes visible to each component only on its next fetch.

use dioxus::prelude::*;
use profile::ProfileRecord;

/// Fetch the stored profile once on mount. `None` until the fetch resolves,
/// and stays `None` when nothing is stored or the fetch fails — callers fall
/// back to the built-in sample content in both cases.
pub fn use_profile_record() -> Signal<Option<ProfileRecord>> {
    let mut record = use_signal(|| Option::<ProfileRecord>::None);

    let _ = use_resource(move || async move {
        match api::get_profile().await {
            Ok(fetched) => record.set(fetched),
            Err(e) => {
                // Non-fatal: the page renders placeholder content instead.
                tracing::warn!("failed to load profile: {e}");
                record.set(None);
            }
        }
    });

    record
}

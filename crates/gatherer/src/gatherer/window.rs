//! Disambiguation of a revision window

use certrev_core::{Error, IssuanceRequest, Result, Window};
use std::sync::Arc;

/// Reduce the requests found for one window to at most one.
///
/// Two or more requests for the same owner and revision are never resolved
/// by picking one; the duplicate is expected to be pruned before the next pass.
pub(super) fn single_request(
    window: Window,
    revision: u32,
    mut requests: Vec<Arc<IssuanceRequest>>,
) -> Result<Option<Arc<IssuanceRequest>>> {
    match requests.len() {
        0 => {
            tracing::debug!(
                window = %window,
                revision,
                "Found no issuance requests owned by this Certificate for the {window} revision"
            );
            Ok(None)
        }
        1 => Ok(requests.pop()),
        count => {
            tracing::debug!(
                window = %window,
                revision,
                count,
                "Found duplicate issuance requests, skipping this pass"
            );
            Err(Error::ambiguous(window, revision, count))
        }
    }
}

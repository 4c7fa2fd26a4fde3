//! Resolution of a certificate's current and next issuance requests
//!
//! Given a certificate snapshot, the [`Gatherer`] looks up the secret the
//! certificate writes to, the issuance request matching the certificate's
//! recorded revision ("current") and the one matching the revision after it
//! ("next"), and returns them as a [`ResolvedView`]. Duplicate requests for
//! either revision abort the pass with [`Error::Ambiguous`].

pub mod gatherer;
pub mod view;

pub use certrev_core::{Error, Result, Window};
pub use gatherer::Gatherer;
pub use view::ResolvedView;

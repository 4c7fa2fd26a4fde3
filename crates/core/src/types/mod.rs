//! Domain types for `certrev`.
//!
//! - **`meta`**: object identity, annotations and owner references shared by
//!   every stored object
//! - **`certificate`**: the certificate snapshot a resolution pass starts from
//! - **`request`**: issuance requests and their status conditions
//! - **`secret`**: stored secrets, treated as opaque payloads

pub mod certificate;
pub mod meta;
pub mod request;
pub mod secret;

pub use certificate::*;
pub use meta::*;
pub use request::*;
pub use secret::*;

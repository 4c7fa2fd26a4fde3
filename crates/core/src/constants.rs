/// Constants used throughout the certrev codebase
// Annotation carrying the revision an issuance request was created for
pub const CERTIFICATE_REVISION_ANNOTATION: &str = "cert-manager.io/certificate-revision";

// First revision handed out to a certificate that has never been issued
pub const INITIAL_REVISION: u32 = 1;

// Environment variable names
pub const CERTREV_LOG_VAR: &str = "CERTREV_LOG";
pub const CERTREV_LOG_FORMAT_VAR: &str = "CERTREV_LOG_FORMAT";
pub const CERTREV_REVISION_ANNOTATION_VAR: &str = "CERTREV_REVISION_ANNOTATION";
pub const CERTREV_CONFIG_VAR: &str = "CERTREV_CONFIG";

// Default log filter
pub const DEFAULT_LOG_FILTER: &str = "info";

// Object kinds
pub const CERTIFICATE_KIND: &str = "Certificate";
pub const CERTIFICATE_API_VERSION: &str = "cert-manager.io/v1";

//! Composable filters over issuance requests
//!
//! A [`Predicate`] names a single criterion (ownership, revision, annotation)
//! and predicates combine with logical AND. Stores and the gatherer only ever
//! see the composed value, so new criteria do not change their control flow.

use crate::constants::CERTIFICATE_REVISION_ANNOTATION;
use crate::types::{Certificate, IssuanceRequest};
use std::fmt::{self, Display};
use uuid::Uuid;

/// A named filter over issuance requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Every inner predicate must match. Empty matches everything.
    All(Vec<Predicate>),
    /// Some owner reference points at this uid
    OwnedBy(Uuid),
    /// The revision annotation is exactly the decimal form of this revision
    Revision { annotation: String, revision: u32 },
    /// The annotation is present with exactly this value
    Annotation { key: String, value: String },
}

impl Predicate {
    /// Match requests created by `certificate`
    pub fn owned_by(certificate: &Certificate) -> Self {
        Predicate::OwnedBy(certificate.uid())
    }

    /// Match requests tagged with `revision` under the default annotation
    pub fn revision(revision: u32) -> Self {
        Self::revision_at(CERTIFICATE_REVISION_ANNOTATION, revision)
    }

    /// Match requests tagged with `revision` under a custom annotation
    pub fn revision_at(annotation: impl Into<String>, revision: u32) -> Self {
        Predicate::Revision {
            annotation: annotation.into(),
            revision,
        }
    }

    pub fn annotation(key: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Annotation {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Combine predicates with logical AND
    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::All(predicates.into_iter().collect())
    }

    /// Combine with another predicate, flattening nested conjunctions
    #[must_use]
    pub fn and(self, other: Predicate) -> Self {
        let mut parts = match self {
            Predicate::All(parts) => parts,
            single => vec![single],
        };
        match other {
            Predicate::All(more) => parts.extend(more),
            single => parts.push(single),
        }
        Predicate::All(parts)
    }

    pub fn matches(&self, request: &IssuanceRequest) -> bool {
        match self {
            Predicate::All(parts) => parts.iter().all(|p| p.matches(request)),
            Predicate::OwnedBy(uid) => request.metadata.is_owned_by(*uid),
            Predicate::Revision {
                annotation,
                revision,
            } => request.metadata.annotation(annotation) == Some(revision.to_string().as_str()),
            Predicate::Annotation { key, value } => {
                request.metadata.annotation(key) == Some(value.as_str())
            }
        }
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::All(parts) if parts.is_empty() => f.write_str("everything"),
            Predicate::All(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" && ")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            }
            Predicate::OwnedBy(uid) => write!(f, "owned-by({uid})"),
            Predicate::Revision { revision, .. } => write!(f, "revision({revision})"),
            Predicate::Annotation { key, value } => write!(f, "annotation({key}={value})"),
        }
    }
}

impl FromIterator<Predicate> for Predicate {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Predicate::all(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cert() -> Certificate {
        Certificate::new("default", "web", "web-tls")
    }

    #[test]
    fn test_owned_by_rejects_foreign_owner() {
        let mine = cert();
        let other = cert();
        let req = IssuanceRequest::for_certificate(&other, "web-1", 1);

        assert!(!Predicate::owned_by(&mine).matches(&req));
        assert!(Predicate::owned_by(&other).matches(&req));
    }

    #[test]
    fn test_conjunction_requires_every_part() {
        let crt = cert();
        let req = IssuanceRequest::for_certificate(&crt, "web-2", 2);

        let p = Predicate::owned_by(&crt).and(Predicate::revision(2));
        assert!(p.matches(&req));

        let p = Predicate::owned_by(&crt).and(Predicate::revision(3));
        assert!(!p.matches(&req));
    }

    #[test]
    fn test_and_flattens() {
        let crt = cert();
        let p = Predicate::owned_by(&crt)
            .and(Predicate::revision(1))
            .and(Predicate::all([Predicate::annotation("a", "b")]));
        match p {
            Predicate::All(parts) => assert_eq!(parts.len(), 3),
            other => panic!("expected conjunction, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_conjunction_matches_everything() {
        let req = IssuanceRequest::new("default", "orphan");
        assert!(Predicate::All(Vec::new()).matches(&req));
        assert_eq!(Predicate::All(Vec::new()).to_string(), "everything");
    }

    #[test]
    fn test_custom_revision_annotation() {
        let req = IssuanceRequest::new("default", "web-1").with_annotation("example.com/rev", "4");
        assert!(Predicate::revision_at("example.com/rev", 4).matches(&req));
        assert!(!Predicate::revision(4).matches(&req));
    }

    #[test]
    fn test_revision_requires_canonical_decimal() {
        let crt = cert();
        for raw in ["03", "+3", " 3 ", "3\n"] {
            let req = IssuanceRequest::new("default", "web")
                .owned_by(&crt)
                .with_annotation(CERTIFICATE_REVISION_ANNOTATION, raw);
            assert!(!Predicate::revision(3).matches(&req), "{raw:?} matched revision 3");
        }

        let req = IssuanceRequest::new("default", "web")
            .with_annotation(CERTIFICATE_REVISION_ANNOTATION, " +4 ");
        assert!(!Predicate::revision(4).matches(&req));
    }

    #[test]
    fn test_display() {
        let uid = Uuid::nil();
        let p = Predicate::OwnedBy(uid).and(Predicate::revision(3));
        assert_eq!(
            p.to_string(),
            "owned-by(00000000-0000-0000-0000-000000000000) && revision(3)"
        );
    }

    proptest! {
        #[test]
        fn test_revision_matches_only_exact_value(tagged in 1u32..10_000, queried in 1u32..10_000) {
            let crt = cert();
            let req = IssuanceRequest::for_certificate(&crt, "web", tagged);
            prop_assert_eq!(Predicate::revision(queried).matches(&req), tagged == queried);
        }
    }
}

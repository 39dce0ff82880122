use async_trait::async_trait;

use crate::error::Result;
use crate::types::Rrset;

/// Record-set writer capability.
///
/// The two operations the apply procedure needs, behind a trait so tests can
/// substitute a fake writer and assert exact payload contents without real
/// network access. This system only writes remote state; it never reads it.
#[async_trait]
pub trait RrsetWriter: Send + Sync {
    /// Writer identifier, used in logs and error context.
    fn id(&self) -> &'static str;

    /// Idempotently set the record set addressed by `(subname, type)` to
    /// exactly the given content.
    async fn replace(&self, rrset: &Rrset) -> Result<()>;

    /// Create the given record sets via the collection endpoint.
    ///
    /// Used as the fallback when [`replace`](Self::replace) reports a
    /// non-success status.
    async fn create(&self, rrsets: &[Rrset]) -> Result<()>;
}

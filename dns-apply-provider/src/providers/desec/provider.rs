//! deSEC `RrsetWriter` trait implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::RrsetWriter;
use crate::types::Rrset;

use super::{DesecProvider, PROVIDER_ID};

#[async_trait]
impl RrsetWriter for DesecProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn replace(&self, rrset: &Rrset) -> Result<()> {
        // PUT {base}/{subname}/{TYPE}/ replaces the addressed rrset wholesale.
        self.put(
            &format!("/{}/{}/", rrset.subname, rrset.record_type),
            rrset,
        )
        .await
    }

    async fn create(&self, rrsets: &[Rrset]) -> Result<()> {
        // POST {base}/ takes a list of rrsets to create.
        self.post("/", &rrsets).await
    }
}

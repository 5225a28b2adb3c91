use crate::core::changes::Changes;
use crate::core::domain_filter::DomainFilter;
use crate::core::endpoint::Endpoint;
use crate::error::Error;
use async_trait::async_trait;

/// What a DNS reconciliation controller needs from a registrar backend.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;
    fn domain_filter(&self) -> &DomainFilter;
    async fn records(&self) -> Result<Vec<Endpoint>, Error>;
    async fn apply_changes(&self, changes: &Changes) -> Result<(), Error>;
}

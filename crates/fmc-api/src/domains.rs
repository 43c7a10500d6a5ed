// Domain endpoints
//
// Domain discovery is platform-scoped (not domain-scoped), using
// `/api/fmc_platform/v1/info/domain` rather than the usual
// `/api/fmc_config/v1/domain/{uuid}/...` pattern.

use tracing::debug;

use crate::client::FmcClient;
use crate::error::Error;
use crate::models::{Domain, DomainPage};

impl FmcClient {
    /// List the administrative domains visible to the authenticated user.
    ///
    /// `GET /api/fmc_platform/v1/info/domain` (platform-level)
    pub async fn list_domains(&self) -> Result<Vec<Domain>, Error> {
        let url = self.platform_url("info/domain")?;
        debug!("listing domains");

        let page: DomainPage = self.get(url).await?;
        if let Some(paging) = &page.paging {
            debug!(count = paging.count, "domain listing complete");
        }
        Ok(page.items)
    }
}

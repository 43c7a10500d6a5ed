// Device record endpoints
//
// Registration happens per domain via the configuration API. A successful
// create kicks off a background registration task on the management
// center; the task reference in the response body is not surfaced.

use tracing::debug;
use uuid::Uuid;

use crate::client::FmcClient;
use crate::error::Error;
use crate::models::DeviceRecord;

impl FmcClient {
    /// Register a managed device record in the given domain.
    ///
    /// `POST /api/fmc_config/v1/domain/{uuid}/devices/devicerecords`
    pub async fn create_device(
        &self,
        domain_uuid: &Uuid,
        record: &DeviceRecord,
    ) -> Result<(), Error> {
        let url = self.config_url(domain_uuid, "devices/devicerecords")?;
        debug!(device = %record.name, host = %record.host_name, "creating device record");
        self.post(url, record).await
    }
}

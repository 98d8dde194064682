use crate::TenantDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpgradeResponse {
    pub message: String,
    pub tenant: TenantDto,
}

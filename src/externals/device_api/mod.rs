use std::time::Duration;

use url::Url;

use self::adapters::{HttpDeviceApi, HttpDeviceApiError};

pub mod adapters;

pub struct DeviceApiModule {
    pub device_api_adapter: HttpDeviceApi,
}

impl DeviceApiModule {
    pub fn initialize(base_url: Url, timeout: Duration) -> Result<Self, HttpDeviceApiError> {
        Ok(Self {
            device_api_adapter: HttpDeviceApi::new(base_url, timeout)?,
        })
    }
}

use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::{
    db::{Store, next_id},
    error::ServiceError,
    model::device::Device,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDevice {
    #[schema(example = "Loading dock")]
    pub name: String,
    #[schema(example = "America/Chicago")]
    pub timezone: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateDevice {
    pub name: Option<String>,
    pub timezone: Option<String>,
}

pub fn list_devices(store: &Store, company_id: u64) -> Vec<Device> {
    store
        .devices
        .iter()
        .filter(|d| d.company_id == company_id)
        .cloned()
        .collect()
}

pub(crate) fn find_device(store: &Store, company_id: u64, device_id: u64) -> Result<&Device, ServiceError> {
    store
        .devices
        .iter()
        .find(|d| d.device_id == device_id && d.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Device"))
}

pub fn create_device(store: &mut Store, company_id: u64, input: CreateDevice) -> Device {
    let device = Device {
        device_id: next_id(store.devices.iter().map(|d| d.device_id)),
        name: input.name,
        timezone: input.timezone,
        company_id,
    };
    debug!(device_id = device.device_id, company_id, "Device registered");
    store.devices.push(device.clone());
    device
}

pub fn update_device(
    store: &mut Store,
    company_id: u64,
    device_id: u64,
    patch: UpdateDevice,
) -> Result<Device, ServiceError> {
    let device = store
        .devices
        .iter_mut()
        .find(|d| d.device_id == device_id && d.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Device"))?;

    if let Some(name) = patch.name {
        device.name = name;
    }
    if let Some(timezone) = patch.timezone {
        device.timezone = timezone;
    }
    Ok(device.clone())
}

pub fn delete_device(store: &mut Store, company_id: u64, device_id: u64) -> Result<(), ServiceError> {
    let idx = store
        .devices
        .iter()
        .position(|d| d.device_id == device_id && d.company_id == company_id)
        .ok_or_else(|| ServiceError::not_found("Device"))?;
    store.devices.remove(idx);
    Ok(())
}

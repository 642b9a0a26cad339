//! Read models returned by `GET /devices` and `GET /groups`.

use serde::{Deserialize, Serialize};

/// Default Art-Net UDP port used by the collaborator when none is given.
pub const DEFAULT_ARTNET_PORT: u16 = 6454;

fn default_port() -> i64 {
    i64::from(DEFAULT_ARTNET_PORT)
}

/// A registered pixel device.
///
/// Numbers are stored as the collaborator returns them. Nothing stops a
/// device from being registered with an out-of-range port or a negative
/// pixel count, and such an entry must not prevent listing the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    pub ip: String,
    pub pixels: i64,
    #[serde(default = "default_port")]
    pub port: i64,
}

/// A named group of devices that are colored together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub name: String,
    #[serde(default)]
    pub devices: Vec<DeviceInfo>,
}

impl GroupInfo {
    /// Names of the member devices, in group order.
    pub fn device_names(&self) -> impl Iterator<Item = &str> {
        self.devices.iter().map(|device| device.name.as_str())
    }
}

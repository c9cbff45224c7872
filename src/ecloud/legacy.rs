//! eCloud v1 entities
//!
//! The v1 API identifies most entities by integer and performs mutations
//! synchronously, so nothing here returns a task.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::null_as_default;
use crate::resource::{Creatable, Deletable, Patchable, Resource};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VirtualMachinePowerStatus {
    Online,
    Offline,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VirtualMachineDisk {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capacity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VirtualMachine {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub computername: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpu: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ram_gb: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hdd_gb: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip_internal: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip_external: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub template: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub backup: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub support: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub environment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub solution_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub power_status: VirtualMachinePowerStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hdd_disks: Vec<VirtualMachineDisk>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVirtualMachineRequest {
    pub environment: String,
    pub template: String,
    pub cpu: u32,
    pub ram: u32,
    pub hdd: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computername: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_keys: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchVirtualMachineRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<u32>,
}

impl Resource for VirtualMachine {
    const KEY: &'static str = "virtual-machine";
    type Id = i64;
}

impl Creatable for VirtualMachine {
    type Request = CreateVirtualMachineRequest;
    type Created = i64;
}

impl Patchable for VirtualMachine {
    type Request = PatchVirtualMachineRequest;
    type Patched = ();
}

impl Deletable for VirtualMachine {
    type Deleted = ();
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Solution {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub environment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pod_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub encryption_enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub encryption_default: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchSolutionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_default: Option<bool>,
}

impl Resource for Solution {
    const KEY: &'static str = "solution";
    type Id = i64;
}

impl Patchable for Solution {
    type Request = PatchSolutionRequest;
    type Patched = ();
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Site {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub solution_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pod_id: i64,
}

impl Resource for Site {
    const KEY: &'static str = "site";
    type Id = i64;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pod {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: PodServices,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodServices {
    #[serde(default, deserialize_with = "null_as_default")]
    pub public: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub burst: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub appliances: bool,
}

impl Resource for Pod {
    const KEY: &'static str = "pod";
    type Id = i64;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Datastore {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub solution_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub site_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capacity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allocated: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: u32,
}

impl Resource for Datastore {
    const KEY: &'static str = "datastore";
    type Id = i64;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Appliance {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo_uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documentation_uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Appliance {
    const KEY: &'static str = "appliance";
    type Id = str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_virtual_machine_power_status() {
        let vm: VirtualMachine = serde_json::from_value(json!({
            "id": 123,
            "name": "legacy-01",
            "power_status": "online",
            "hdd_disks": [{"name": "Hard disk 1", "capacity": 20}]
        }))
        .unwrap();

        assert_eq!(vm.id, 123);
        assert_eq!(vm.power_status, VirtualMachinePowerStatus::Online);
        assert_eq!(vm.hdd_disks.len(), 1);
    }

    #[test]
    fn test_unknown_power_status() {
        let vm: VirtualMachine = serde_json::from_value(json!({
            "id": 1,
            "power_status": "suspended"
        }))
        .unwrap();
        assert_eq!(vm.power_status, VirtualMachinePowerStatus::Unknown);
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let vm: VirtualMachine = serde_json::from_value(json!({
            "id": 1,
            "hostname": null,
            "ip_external": null,
            "ram_gb": null,
            "power_status": null,
            "hdd_disks": null
        }))
        .unwrap();
        assert_eq!(vm.hostname, "");
        assert_eq!(vm.ram_gb, 0);
        assert_eq!(vm.power_status, VirtualMachinePowerStatus::Unknown);
        assert!(vm.hdd_disks.is_empty());

        let pod: Pod = serde_json::from_value(json!({"id": 3, "services": null})).unwrap();
        assert!(!pod.services.appliances);
    }

    #[test]
    fn test_create_request_skips_unset_fields() {
        let request = CreateVirtualMachineRequest {
            environment: "Hybrid".to_string(),
            template: "CentOS 7 64-bit".to_string(),
            cpu: 2,
            ram: 2,
            hdd: 20,
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["environment"], "Hybrid");
        assert!(value.get("solution_id").is_none());
    }
}

//! eCloud v2 entities and request bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::connection::{TaskId, TaskReference};
use crate::resource::{Creatable, Deletable, Patchable, Resource};

/// Decode an explicit `null` the same way as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Sync state reported on most v2 resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceSync {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub sync_type: String,
}

impl ResourceSync {
    pub fn is_complete(&self) -> bool {
        self.status == "complete"
    }
}

// =============================================================================
// Regions / availability zones
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Region {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Resource for Region {
    const KEY: &'static str = "region";
    type Id = str;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityZone {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub datacentre_site_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region_id: String,
}

impl Resource for AvailabilityZone {
    const KEY: &'static str = "availability-zone";
    type Id = str;
}

// =============================================================================
// VPCs
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Vpc {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub console_enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub advanced_networking: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVpcRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub region_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_networking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchVpcRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_networking: Option<bool>,
}

impl Resource for Vpc {
    const KEY: &'static str = "vpc";
    type Id = str;
}

impl Creatable for Vpc {
    type Request = CreateVpcRequest;
    type Created = TaskReference;
}

impl Patchable for Vpc {
    type Request = PatchVpcRequest;
    type Patched = TaskReference;
}

impl Deletable for Vpc {
    type Deleted = TaskId;
}

// =============================================================================
// Networks / routers
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Network {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub router_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subnet: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateNetworkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub router_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchNetworkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource for Network {
    const KEY: &'static str = "network";
    type Id = str;
}

impl Creatable for Network {
    type Request = CreateNetworkRequest;
    type Created = TaskReference;
}

impl Patchable for Network {
    type Request = PatchNetworkRequest;
    type Patched = TaskReference;
}

impl Deletable for Network {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Router {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability_zone_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub router_throughput_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRouterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vpc_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_throughput_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchRouterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_throughput_id: Option<String>,
}

impl Resource for Router {
    const KEY: &'static str = "router";
    type Id = str;
}

impl Creatable for Router {
    type Request = CreateRouterRequest;
    type Created = TaskReference;
}

impl Patchable for Router {
    type Request = PatchRouterRequest;
    type Patched = TaskReference;
}

impl Deletable for Router {
    type Deleted = TaskId;
}

// =============================================================================
// Instances / volumes / NICs
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Instance {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability_zone_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vcpu_cores: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ram_capacity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locked: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub backup_enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume_capacity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub host_group_id: String,
    #[serde(default)]
    pub online: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInstanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vpc_id: String,
    pub image_id: String,
    pub network_id: String,
    pub vcpu_cores: u32,
    pub ram_capacity: u32,
    pub volume_capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_iops: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floating_ip_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_floating_ip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key_pair_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchInstanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcpu_cores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_group_id: Option<String>,
}

impl Resource for Instance {
    const KEY: &'static str = "instance";
    type Id = str;
}

impl Creatable for Instance {
    type Request = CreateInstanceRequest;
    type Created = TaskReference;
}

impl Patchable for Instance {
    type Request = PatchInstanceRequest;
    type Patched = TaskReference;
}

impl Deletable for Instance {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Volume {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability_zone_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capacity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub iops: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attached: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mountpoint: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub volume_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_shared: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVolumeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vpc_id: String,
    pub availability_zone_id: String,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchVolumeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<u32>,
}

/// Body of the volume attach/detach actions
#[derive(Debug, Clone, Serialize)]
pub struct VolumeAttachmentRequest {
    pub instance_id: String,
}

impl Resource for Volume {
    const KEY: &'static str = "volume";
    type Id = str;
}

impl Creatable for Volume {
    type Request = CreateVolumeRequest;
    type Created = TaskReference;
}

impl Patchable for Volume {
    type Request = PatchVolumeRequest;
    type Patched = TaskReference;
}

impl Deletable for Volume {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Nic {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mac_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Nic {
    const KEY: &'static str = "nic";
    type Id = str;
}

// =============================================================================
// Floating IPs
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FloatingIp {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability_zone_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateFloatingIpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vpc_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchFloatingIpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Body of the floating IP assign action
#[derive(Debug, Clone, Serialize)]
pub struct AssignFloatingIpRequest {
    pub resource_id: String,
}

impl Resource for FloatingIp {
    const KEY: &'static str = "floating-ip";
    type Id = str;
}

impl Creatable for FloatingIp {
    type Request = CreateFloatingIpRequest;
    type Created = TaskReference;
}

impl Patchable for FloatingIp {
    type Request = PatchFloatingIpRequest;
    type Patched = TaskReference;
}

impl Deletable for FloatingIp {
    type Deleted = TaskId;
}

// =============================================================================
// Firewalls / network policies
// =============================================================================

/// Accept/drop/reject verdict of a rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleAction {
    #[default]
    Allow,
    Drop,
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleDirection {
    In,
    Out,
    #[default]
    #[serde(rename = "IN_OUT")]
    InOut,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirewallPolicy {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub router_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sequence: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateFirewallPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub router_id: String,
    pub sequence: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchFirewallPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i32>,
}

impl Resource for FirewallPolicy {
    const KEY: &'static str = "firewall-policy";
    type Id = str;
}

impl Creatable for FirewallPolicy {
    type Request = CreateFirewallPolicyRequest;
    type Created = TaskReference;
}

impl Patchable for FirewallPolicy {
    type Request = PatchFirewallPolicyRequest;
    type Patched = TaskReference;
}

impl Deletable for FirewallPolicy {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirewallRule {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub firewall_policy_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sequence: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: RuleAction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub direction: RuleDirection,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateFirewallRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub firewall_policy_id: String,
    pub sequence: i32,
    pub source: String,
    pub destination: String,
    pub action: RuleAction,
    pub direction: RuleDirection,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchFirewallRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RuleAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<RuleDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Resource for FirewallRule {
    const KEY: &'static str = "firewall-rule";
    type Id = str;
}

impl Creatable for FirewallRule {
    type Request = CreateFirewallRuleRequest;
    type Created = TaskReference;
}

impl Patchable for FirewallRule {
    type Request = PatchFirewallRuleRequest;
    type Patched = TaskReference;
}

impl Deletable for FirewallRule {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirewallRulePort {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub firewall_rule_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub protocol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateFirewallRulePortRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub firewall_rule_id: String,
    pub protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchFirewallRulePortRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl Resource for FirewallRulePort {
    const KEY: &'static str = "firewall-rule-port";
    type Id = str;
}

impl Creatable for FirewallRulePort {
    type Request = CreateFirewallRulePortRequest;
    type Created = TaskReference;
}

impl Patchable for FirewallRulePort {
    type Request = PatchFirewallRulePortRequest;
    type Patched = TaskReference;
}

impl Deletable for FirewallRulePort {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkPolicy {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateNetworkPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub network_id: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchNetworkPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource for NetworkPolicy {
    const KEY: &'static str = "network-policy";
    type Id = str;
}

impl Creatable for NetworkPolicy {
    type Request = CreateNetworkPolicyRequest;
    type Created = TaskReference;
}

impl Patchable for NetworkPolicy {
    type Request = PatchNetworkPolicyRequest;
    type Patched = TaskReference;
}

impl Deletable for NetworkPolicy {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkRule {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_policy_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sequence: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: RuleAction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub direction: RuleDirection,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub rule_type: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateNetworkRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub network_policy_id: String,
    pub sequence: i32,
    pub source: String,
    pub destination: String,
    pub action: RuleAction,
    pub direction: RuleDirection,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchNetworkRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RuleAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<RuleDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Resource for NetworkRule {
    const KEY: &'static str = "network-rule";
    type Id = str;
}

impl Creatable for NetworkRule {
    type Request = CreateNetworkRuleRequest;
    type Created = TaskReference;
}

impl Patchable for NetworkRule {
    type Request = PatchNetworkRuleRequest;
    type Patched = TaskReference;
}

impl Deletable for NetworkRule {
    type Deleted = TaskId;
}

// =============================================================================
// VPN
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VpnService {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub router_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVpnServiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub router_id: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchVpnServiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource for VpnService {
    const KEY: &'static str = "vpn-service";
    type Id = str;
}

impl Creatable for VpnService {
    type Request = CreateVpnServiceRequest;
    type Created = TaskReference;
}

impl Patchable for VpnService {
    type Request = PatchVpnServiceRequest;
    type Patched = TaskReference;
}

impl Deletable for VpnService {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VpnEndpoint {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpn_service_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub floating_ip_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVpnEndpointRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vpn_service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floating_ip_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchVpnEndpointRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource for VpnEndpoint {
    const KEY: &'static str = "vpn-endpoint";
    type Id = str;
}

impl Creatable for VpnEndpoint {
    type Request = CreateVpnEndpointRequest;
    type Created = TaskReference;
}

impl Patchable for VpnEndpoint {
    type Request = PatchVpnEndpointRequest;
    type Patched = TaskReference;
}

impl Deletable for VpnEndpoint {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VpnSession {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpn_profile_group_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpn_service_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpn_endpoint_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remote_ip: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remote_networks: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub local_networks: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVpnSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vpn_profile_group_id: String,
    pub vpn_service_id: String,
    pub vpn_endpoint_id: String,
    pub remote_ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_networks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_networks: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchVpnSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_profile_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_networks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_networks: Option<String>,
}

impl Resource for VpnSession {
    const KEY: &'static str = "vpn-session";
    type Id = str;
}

impl Creatable for VpnSession {
    type Request = CreateVpnSessionRequest;
    type Created = TaskReference;
}

impl Patchable for VpnSession {
    type Request = PatchVpnSessionRequest;
    type Patched = TaskReference;
}

impl Deletable for VpnSession {
    type Deleted = TaskId;
}

// =============================================================================
// Load balancers
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadBalancer {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability_zone_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub load_balancer_spec_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateLoadBalancerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub availability_zone_id: String,
    pub vpc_id: String,
    pub load_balancer_spec_id: String,
    pub network_id: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchLoadBalancerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource for LoadBalancer {
    const KEY: &'static str = "load-balancer";
    type Id = str;
}

impl Creatable for LoadBalancer {
    type Request = CreateLoadBalancerRequest;
    type Created = TaskReference;
}

impl Patchable for LoadBalancer {
    type Request = PatchLoadBalancerRequest;
    type Patched = TaskReference;
}

impl Deletable for LoadBalancer {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Vip {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub load_balancer_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip_address_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVipRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub load_balancer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocate_floating_ip: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchVipRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource for Vip {
    const KEY: &'static str = "vip";
    type Id = str;
}

impl Creatable for Vip {
    type Request = CreateVipRequest;
    type Created = TaskReference;
}

impl Patchable for Vip {
    type Request = PatchVipRequest;
    type Patched = TaskReference;
}

impl Deletable for Vip {
    type Deleted = TaskId;
}

// =============================================================================
// Images / hosts / key pairs / DHCP
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
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
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visibility: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Image {
    const KEY: &'static str = "image";
    type Id = str;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostGroup {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability_zone_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub host_spec_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub windows_enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateHostGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vpc_id: String,
    pub availability_zone_id: String,
    pub host_spec_id: String,
    pub windows_enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchHostGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource for HostGroup {
    const KEY: &'static str = "host-group";
    type Id = str;
}

impl Creatable for HostGroup {
    type Request = CreateHostGroupRequest;
    type Created = TaskReference;
}

impl Patchable for HostGroup {
    type Request = PatchHostGroupRequest;
    type Patched = TaskReference;
}

impl Deletable for HostGroup {
    type Deleted = TaskId;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Host {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub host_group_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Host {
    const KEY: &'static str = "host";
    type Id = str;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SshKeyPair {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_key: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSshKeyPairRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub public_key: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchSshKeyPairRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

// Key pairs are synchronous: no task is created
impl Resource for SshKeyPair {
    const KEY: &'static str = "ssh-key-pair";
    type Id = str;
}

impl Creatable for SshKeyPair {
    type Request = CreateSshKeyPairRequest;
    type Created = String;
}

impl Patchable for SshKeyPair {
    type Request = PatchSshKeyPairRequest;
    type Patched = ();
}

impl Deletable for SshKeyPair {
    type Deleted = ();
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dhcp {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vpc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability_zone_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sync: ResourceSync,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Dhcp {
    const KEY: &'static str = "dhcp";
    type Id = str;
}

// =============================================================================
// Tasks
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Complete,
    Failed,
    InProgress,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Complete or failed
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TaskStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Task {
    const KEY: &'static str = "task";
    type Id = str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instance_decodes_with_missing_fields() {
        let instance: Instance = serde_json::from_value(json!({
            "id": "i-abcdef12",
            "name": "web-01",
            "created_at": "2021-01-01T00:00:00+00:00"
        }))
        .unwrap();

        assert_eq!(instance.id, "i-abcdef12");
        assert_eq!(instance.vcpu_cores, 0);
        assert!(!instance.locked);
        assert!(instance.updated_at.is_none());
        assert!(instance.created_at.is_some());
    }

    #[test]
    fn test_task_status_values() {
        let task: Task = serde_json::from_value(json!({
            "id": "task-abcdef12",
            "status": "in-progress"
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(!task.status.is_terminal());

        let task: Task = serde_json::from_value(json!({
            "id": "task-abcdef12",
            "status": "paused"
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::Unknown);
    }

    #[test]
    fn test_rule_enums_wire_format() {
        let request = CreateFirewallRuleRequest {
            firewall_policy_id: "fwp-abcdef12".to_string(),
            action: RuleAction::Drop,
            direction: RuleDirection::InOut,
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["action"], "DROP");
        assert_eq!(value["direction"], "IN_OUT");
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let volume: Volume = serde_json::from_value(json!({
            "id": "vol-abcdef12",
            "name": "data",
            "mountpoint": null,
            "capacity": 20,
            "iops": null,
            "attached": null,
            "sync": null
        }))
        .unwrap();

        assert_eq!(volume.mountpoint, "");
        assert_eq!(volume.capacity, 20);
        assert_eq!(volume.iops, 0);
        assert!(!volume.attached);
        assert_eq!(volume.sync, ResourceSync::default());

        let rule: FirewallRule = serde_json::from_value(json!({
            "id": "fwr-abcdef12",
            "action": null,
            "direction": null
        }))
        .unwrap();
        assert_eq!(rule.action, RuleAction::Allow);
        assert_eq!(rule.direction, RuleDirection::InOut);
    }

    #[test]
    fn test_sync_complete() {
        let vpc: Vpc = serde_json::from_value(json!({
            "id": "vpc-abcdef12",
            "sync": {"status": "complete", "type": "update"}
        }))
        .unwrap();
        assert!(vpc.sync.is_complete());
        assert_eq!(vpc.sync.sync_type, "update");
    }
}

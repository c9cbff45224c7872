//! Resource Registry - Load resource definitions from JSON
//!
//! This module loads all eCloud resource definitions from embedded JSON files
//! and provides lookup functions for the resource clients.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Embedded resource JSON files (compiled into the binary)
const RESOURCE_FILES: &[&str] = &[
    include_str!("../resources/ecloud_v2.json"),
    include_str!("../resources/ecloud_v1.json"),
];

/// API generation a resource belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub const fn base_path(self) -> &'static str {
        match self {
            Self::V1 => "/ecloud/v1",
            Self::V2 => "/ecloud/v2",
        }
    }
}

/// Shape of a resource identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    String,
    Integer,
}

/// Sub-resource definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct SubResourceDef {
    pub resource_key: String,
    /// Path segment appended to the parent's item path
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMethod {
    Put,
    Post,
}

impl ActionMethod {
    pub fn as_method(self) -> reqwest::Method {
        match self {
            Self::Put => reqwest::Method::PUT,
            Self::Post => reqwest::Method::POST,
        }
    }
}

/// Action definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct ActionDef {
    pub key: String,
    pub display_name: String,
    pub method: ActionMethod,
    pub path: String,
}

/// Resource definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDef {
    pub display_name: String,
    pub api: ApiVersion,
    pub path: String,
    pub id_kind: IdKind,
    #[serde(default)]
    pub sub_resources: Vec<SubResourceDef>,
    #[serde(default)]
    pub actions: Vec<ActionDef>,
}

impl ResourceDef {
    /// Collection endpoint, e.g. `/ecloud/v2/vpcs`
    pub fn collection_path(&self) -> String {
        format!("{}/{}", self.api.base_path(), self.path)
    }

    /// Item endpoint, e.g. `/ecloud/v2/vpcs/vpc-abcdef12`
    pub fn item_path(&self, id: &dyn fmt::Display) -> String {
        format!(
            "{}/{}",
            self.collection_path(),
            urlencoding::encode(&id.to_string())
        )
    }

    pub fn sub_resource(&self, resource_key: &str) -> Option<&SubResourceDef> {
        self.sub_resources
            .iter()
            .find(|s| s.resource_key == resource_key)
    }

    pub fn action(&self, key: &str) -> Option<&ActionDef> {
        self.actions.iter().find(|a| a.key == key)
    }
}

/// Root structure of resources/*.json
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    #[serde(default)]
    pub resources: HashMap<String, ResourceDef>,
}

/// Global registry loaded from JSON
static REGISTRY: OnceLock<ResourceConfig> = OnceLock::new();

/// Get the resource registry (loads from embedded JSON on first access)
pub fn get_registry() -> &'static ResourceConfig {
    REGISTRY.get_or_init(|| {
        let mut final_config = ResourceConfig {
            resources: HashMap::new(),
        };

        for content in RESOURCE_FILES {
            let partial: ResourceConfig = serde_json::from_str(content)
                .unwrap_or_else(|e| panic!("Failed to parse embedded resource JSON: {}", e));
            final_config.resources.extend(partial.resources);
        }

        final_config
    })
}

/// Get a resource definition by key
pub fn get_resource(key: &str) -> Option<&'static ResourceDef> {
    get_registry().resources.get(key)
}

/// Get all resource keys, sorted
pub fn get_all_resource_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = get_registry()
        .resources
        .keys()
        .map(|s| s.as_str())
        .collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads_successfully() {
        let registry = get_registry();
        assert!(
            !registry.resources.is_empty(),
            "Registry should have resources"
        );
    }

    #[test]
    fn test_vip_resource_exists() {
        let resource = get_resource("vip");
        assert!(resource.is_some(), "VIP resource should exist");

        let resource = resource.unwrap();
        assert_eq!(resource.display_name, "VIP");
        assert_eq!(resource.api, ApiVersion::V2);
        assert_eq!(resource.collection_path(), "/ecloud/v2/vips");
        assert_eq!(resource.item_path(&"vip-abcdef12"), "/ecloud/v2/vips/vip-abcdef12");
    }

    #[test]
    fn test_legacy_resources_use_v1_paths() {
        let resource = get_resource("virtual-machine").unwrap();
        assert_eq!(resource.id_kind, IdKind::Integer);
        assert_eq!(resource.item_path(&123), "/ecloud/v1/vms/123");
    }

    #[test]
    fn test_item_path_encodes_id() {
        let resource = get_resource("vpc").unwrap();
        assert_eq!(resource.item_path(&"a/b"), "/ecloud/v2/vpcs/a%2Fb");
    }

    #[test]
    fn test_get_all_resource_keys() {
        let keys = get_all_resource_keys();
        assert!(!keys.is_empty(), "Should have resource types");
        assert!(keys.contains(&"instance"), "Should contain instance");
        assert!(keys.contains(&"task"), "Should contain task");
    }

    #[test]
    fn test_sub_resource_keys_resolve() {
        for (key, resource) in &get_registry().resources {
            for sub in &resource.sub_resources {
                assert!(
                    get_resource(&sub.resource_key).is_some(),
                    "{} sub-resource {} is not registered",
                    key,
                    sub.resource_key
                );
            }
        }
    }

    #[test]
    fn test_each_file_holds_one_generation() {
        for (content, api) in RESOURCE_FILES.iter().zip([ApiVersion::V2, ApiVersion::V1]) {
            let config: ResourceConfig = serde_json::from_str(content).unwrap();
            for (key, resource) in &config.resources {
                assert_eq!(resource.api, api, "{}", key);
                assert!(resource.collection_path().starts_with(api.base_path()));
                assert!(!resource.path.starts_with('/'), "{} path must be relative", key);
            }
        }
    }

    #[test]
    fn test_instance_actions() {
        let instance = get_resource("instance").unwrap();
        let power_on = instance.action("power-on").unwrap();
        assert_eq!(power_on.method, ActionMethod::Put);
        assert!(instance.action("explode").is_none());
        assert_eq!(instance.sub_resource("volume").unwrap().path, "volumes");
    }
}

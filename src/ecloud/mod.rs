//! eCloud service
//!
//! Typed entities for both API generations and [`EcloudService`], which
//! exposes one named method per operation (`get_vips`, `get_vip`,
//! `create_vip`, `get_instance_volumes`, ...). Every method is a thin
//! wrapper over [`ResourceClient`].

use std::borrow::Borrow;

use crate::connection::{ApiRequestParameters, Connection, TaskId};
use crate::error::Result;
use crate::resource::{Creatable, Deletable, Paginated, Patchable, Resource, ResourceClient};

pub mod legacy;
pub mod models;

pub use legacy::*;
pub use models::*;

/// Generates the named wrappers on [`EcloudService`]
macro_rules! ecloud_methods {
    (list $ty:ty => $list:ident, $paginated:ident) => {
        #[doc = concat!("All `", stringify!($ty), "` entries, following every page")]
        pub async fn $list(&self, parameters: ApiRequestParameters) -> Result<Vec<$ty>> {
            self.resource::<$ty>()?.list(parameters).await
        }

        #[doc = concat!("One page of `", stringify!($ty), "` entries")]
        pub async fn $paginated(
            &self,
            parameters: ApiRequestParameters,
        ) -> Result<Paginated<'_, C, $ty>> {
            self.resource::<$ty>()?.list_paginated(parameters).await
        }
    };
    (get $ty:ty, $id:ty => $name:ident) => {
        pub async fn $name(&self, id: $id) -> Result<$ty> {
            self.resource::<$ty>()?.get(Borrow::borrow(&id)).await
        }
    };
    (create $ty:ty => $name:ident) => {
        pub async fn $name(
            &self,
            request: &<$ty as Creatable>::Request,
        ) -> Result<<$ty as Creatable>::Created> {
            self.resource::<$ty>()?.create(request).await
        }
    };
    (patch $ty:ty, $id:ty => $name:ident) => {
        pub async fn $name(
            &self,
            id: $id,
            request: &<$ty as Patchable>::Request,
        ) -> Result<<$ty as Patchable>::Patched> {
            self.resource::<$ty>()?.patch(Borrow::borrow(&id), request).await
        }
    };
    (delete $ty:ty, $id:ty => $name:ident) => {
        pub async fn $name(&self, id: $id) -> Result<<$ty as Deletable>::Deleted> {
            self.resource::<$ty>()?.delete(Borrow::borrow(&id)).await
        }
    };
    (children $parent:ty, $id:ty => $child:ty, $list:ident, $paginated:ident) => {
        #[doc = concat!(
            "All `", stringify!($child), "` entries under a `", stringify!($parent), "`"
        )]
        pub async fn $list(
            &self,
            id: $id,
            parameters: ApiRequestParameters,
        ) -> Result<Vec<$child>> {
            self.resource::<$parent>()?
                .list_children::<$child>(Borrow::borrow(&id), parameters)
                .await
        }

        pub async fn $paginated(
            &self,
            id: $id,
            parameters: ApiRequestParameters,
        ) -> Result<Paginated<'_, C, $child>> {
            self.resource::<$parent>()?
                .list_children_paginated::<$child>(Borrow::borrow(&id), parameters)
                .await
        }
    };
    (action $ty:ty, $id:ty, $key:literal => $name:ident -> $out:ty) => {
        pub async fn $name(&self, id: $id) -> Result<$out> {
            self.resource::<$ty>()?
                .action::<(), $out>(Borrow::borrow(&id), $key, None)
                .await
        }
    };
    (action $ty:ty, $id:ty, $key:literal => $name:ident($body:ty) -> $out:ty) => {
        pub async fn $name(&self, id: $id, request: &$body) -> Result<$out> {
            self.resource::<$ty>()?
                .action::<$body, $out>(Borrow::borrow(&id), $key, Some(request))
                .await
        }
    };
}

/// Entry point to the eCloud API
#[derive(Debug, Clone)]
pub struct EcloudService<C> {
    connection: C,
}

impl<C: Connection> EcloudService<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Generic client for any registered resource
    pub fn resource<R: Resource>(&self) -> Result<ResourceClient<'_, C, R>> {
        ResourceClient::new(&self.connection)
    }

    // Regions / availability zones
    ecloud_methods!(list Region => get_regions, get_regions_paginated);
    ecloud_methods!(get Region, &str => get_region);
    ecloud_methods!(
        list AvailabilityZone => get_availability_zones, get_availability_zones_paginated
    );
    ecloud_methods!(get AvailabilityZone, &str => get_availability_zone);

    // VPCs
    ecloud_methods!(list Vpc => get_vpcs, get_vpcs_paginated);
    ecloud_methods!(get Vpc, &str => get_vpc);
    ecloud_methods!(create Vpc => create_vpc);
    ecloud_methods!(patch Vpc, &str => patch_vpc);
    ecloud_methods!(delete Vpc, &str => delete_vpc);
    ecloud_methods!(children Vpc, &str => Volume, get_vpc_volumes, get_vpc_volumes_paginated);
    ecloud_methods!(children Vpc, &str => Instance, get_vpc_instances, get_vpc_instances_paginated);
    ecloud_methods!(children Vpc, &str => Task, get_vpc_tasks, get_vpc_tasks_paginated);

    // Networks
    ecloud_methods!(list Network => get_networks, get_networks_paginated);
    ecloud_methods!(get Network, &str => get_network);
    ecloud_methods!(create Network => create_network);
    ecloud_methods!(patch Network, &str => patch_network);
    ecloud_methods!(delete Network, &str => delete_network);
    ecloud_methods!(children Network, &str => Nic, get_network_nics, get_network_nics_paginated);
    ecloud_methods!(children Network, &str => Task, get_network_tasks, get_network_tasks_paginated);

    // Routers
    ecloud_methods!(list Router => get_routers, get_routers_paginated);
    ecloud_methods!(get Router, &str => get_router);
    ecloud_methods!(create Router => create_router);
    ecloud_methods!(patch Router, &str => patch_router);
    ecloud_methods!(delete Router, &str => delete_router);
    ecloud_methods!(
        children Router, &str => FirewallPolicy,
        get_router_firewall_policies, get_router_firewall_policies_paginated
    );
    ecloud_methods!(
        children Router, &str => Network,
        get_router_networks, get_router_networks_paginated
    );
    ecloud_methods!(
        children Router, &str => VpnService,
        get_router_vpn_services, get_router_vpn_services_paginated
    );
    ecloud_methods!(children Router, &str => Task, get_router_tasks, get_router_tasks_paginated);

    // Instances
    ecloud_methods!(list Instance => get_instances, get_instances_paginated);
    ecloud_methods!(get Instance, &str => get_instance);
    ecloud_methods!(create Instance => create_instance);
    ecloud_methods!(patch Instance, &str => patch_instance);
    ecloud_methods!(delete Instance, &str => delete_instance);
    ecloud_methods!(
        children Instance, &str => Volume,
        get_instance_volumes, get_instance_volumes_paginated
    );
    ecloud_methods!(children Instance, &str => Nic, get_instance_nics, get_instance_nics_paginated);
    ecloud_methods!(
        children Instance, &str => FloatingIp,
        get_instance_floating_ips, get_instance_floating_ips_paginated
    );
    ecloud_methods!(
        children Instance, &str => Task,
        get_instance_tasks, get_instance_tasks_paginated
    );
    ecloud_methods!(action Instance, &str, "power-on" => power_on_instance -> TaskId);
    ecloud_methods!(action Instance, &str, "power-off" => power_off_instance -> TaskId);
    ecloud_methods!(action Instance, &str, "power-reset" => reset_instance -> TaskId);
    ecloud_methods!(action Instance, &str, "power-shutdown" => shutdown_instance -> TaskId);
    ecloud_methods!(action Instance, &str, "power-restart" => restart_instance -> TaskId);
    ecloud_methods!(action Instance, &str, "lock" => lock_instance -> ());
    ecloud_methods!(action Instance, &str, "unlock" => unlock_instance -> ());

    // Volumes
    ecloud_methods!(list Volume => get_volumes, get_volumes_paginated);
    ecloud_methods!(get Volume, &str => get_volume);
    ecloud_methods!(create Volume => create_volume);
    ecloud_methods!(patch Volume, &str => patch_volume);
    ecloud_methods!(delete Volume, &str => delete_volume);
    ecloud_methods!(
        children Volume, &str => Instance,
        get_volume_instances, get_volume_instances_paginated
    );
    ecloud_methods!(children Volume, &str => Task, get_volume_tasks, get_volume_tasks_paginated);
    ecloud_methods!(
        action Volume, &str, "attach" => attach_volume(VolumeAttachmentRequest) -> TaskId
    );
    ecloud_methods!(
        action Volume, &str, "detach" => detach_volume(VolumeAttachmentRequest) -> TaskId
    );

    // NICs
    ecloud_methods!(list Nic => get_nics, get_nics_paginated);
    ecloud_methods!(get Nic, &str => get_nic);

    // Floating IPs
    ecloud_methods!(list FloatingIp => get_floating_ips, get_floating_ips_paginated);
    ecloud_methods!(get FloatingIp, &str => get_floating_ip);
    ecloud_methods!(create FloatingIp => create_floating_ip);
    ecloud_methods!(patch FloatingIp, &str => patch_floating_ip);
    ecloud_methods!(delete FloatingIp, &str => delete_floating_ip);
    ecloud_methods!(
        children FloatingIp, &str => Task,
        get_floating_ip_tasks, get_floating_ip_tasks_paginated
    );
    ecloud_methods!(
        action FloatingIp, &str, "assign" => assign_floating_ip(AssignFloatingIpRequest) -> TaskId
    );
    ecloud_methods!(action FloatingIp, &str, "unassign" => unassign_floating_ip -> TaskId);

    // Firewalls
    ecloud_methods!(list FirewallPolicy => get_firewall_policies, get_firewall_policies_paginated);
    ecloud_methods!(get FirewallPolicy, &str => get_firewall_policy);
    ecloud_methods!(create FirewallPolicy => create_firewall_policy);
    ecloud_methods!(patch FirewallPolicy, &str => patch_firewall_policy);
    ecloud_methods!(delete FirewallPolicy, &str => delete_firewall_policy);
    ecloud_methods!(
        children FirewallPolicy, &str => FirewallRule,
        get_firewall_policy_firewall_rules, get_firewall_policy_firewall_rules_paginated
    );
    ecloud_methods!(
        children FirewallPolicy, &str => Task,
        get_firewall_policy_tasks, get_firewall_policy_tasks_paginated
    );

    ecloud_methods!(list FirewallRule => get_firewall_rules, get_firewall_rules_paginated);
    ecloud_methods!(get FirewallRule, &str => get_firewall_rule);
    ecloud_methods!(create FirewallRule => create_firewall_rule);
    ecloud_methods!(patch FirewallRule, &str => patch_firewall_rule);
    ecloud_methods!(delete FirewallRule, &str => delete_firewall_rule);
    ecloud_methods!(
        children FirewallRule, &str => FirewallRulePort,
        get_firewall_rule_firewall_rule_ports, get_firewall_rule_firewall_rule_ports_paginated
    );

    ecloud_methods!(
        list FirewallRulePort => get_firewall_rule_ports, get_firewall_rule_ports_paginated
    );
    ecloud_methods!(get FirewallRulePort, &str => get_firewall_rule_port);
    ecloud_methods!(create FirewallRulePort => create_firewall_rule_port);
    ecloud_methods!(patch FirewallRulePort, &str => patch_firewall_rule_port);
    ecloud_methods!(delete FirewallRulePort, &str => delete_firewall_rule_port);

    // Network policies
    ecloud_methods!(list NetworkPolicy => get_network_policies, get_network_policies_paginated);
    ecloud_methods!(get NetworkPolicy, &str => get_network_policy);
    ecloud_methods!(create NetworkPolicy => create_network_policy);
    ecloud_methods!(patch NetworkPolicy, &str => patch_network_policy);
    ecloud_methods!(delete NetworkPolicy, &str => delete_network_policy);
    ecloud_methods!(
        children NetworkPolicy, &str => NetworkRule,
        get_network_policy_network_rules, get_network_policy_network_rules_paginated
    );
    ecloud_methods!(
        children NetworkPolicy, &str => Task,
        get_network_policy_tasks, get_network_policy_tasks_paginated
    );

    ecloud_methods!(list NetworkRule => get_network_rules, get_network_rules_paginated);
    ecloud_methods!(get NetworkRule, &str => get_network_rule);
    ecloud_methods!(create NetworkRule => create_network_rule);
    ecloud_methods!(patch NetworkRule, &str => patch_network_rule);
    ecloud_methods!(delete NetworkRule, &str => delete_network_rule);

    // VPN
    ecloud_methods!(list VpnService => get_vpn_services, get_vpn_services_paginated);
    ecloud_methods!(get VpnService, &str => get_vpn_service);
    ecloud_methods!(create VpnService => create_vpn_service);
    ecloud_methods!(patch VpnService, &str => patch_vpn_service);
    ecloud_methods!(delete VpnService, &str => delete_vpn_service);

    ecloud_methods!(list VpnEndpoint => get_vpn_endpoints, get_vpn_endpoints_paginated);
    ecloud_methods!(get VpnEndpoint, &str => get_vpn_endpoint);
    ecloud_methods!(create VpnEndpoint => create_vpn_endpoint);
    ecloud_methods!(patch VpnEndpoint, &str => patch_vpn_endpoint);
    ecloud_methods!(delete VpnEndpoint, &str => delete_vpn_endpoint);

    ecloud_methods!(list VpnSession => get_vpn_sessions, get_vpn_sessions_paginated);
    ecloud_methods!(get VpnSession, &str => get_vpn_session);
    ecloud_methods!(create VpnSession => create_vpn_session);
    ecloud_methods!(patch VpnSession, &str => patch_vpn_session);
    ecloud_methods!(delete VpnSession, &str => delete_vpn_session);

    // Load balancers
    ecloud_methods!(list LoadBalancer => get_load_balancers, get_load_balancers_paginated);
    ecloud_methods!(get LoadBalancer, &str => get_load_balancer);
    ecloud_methods!(create LoadBalancer => create_load_balancer);
    ecloud_methods!(patch LoadBalancer, &str => patch_load_balancer);
    ecloud_methods!(delete LoadBalancer, &str => delete_load_balancer);

    ecloud_methods!(list Vip => get_vips, get_vips_paginated);
    ecloud_methods!(get Vip, &str => get_vip);
    ecloud_methods!(create Vip => create_vip);
    ecloud_methods!(patch Vip, &str => patch_vip);
    ecloud_methods!(delete Vip, &str => delete_vip);

    // Images
    ecloud_methods!(list Image => get_images, get_images_paginated);
    ecloud_methods!(get Image, &str => get_image);

    // Dedicated hosts
    ecloud_methods!(list HostGroup => get_host_groups, get_host_groups_paginated);
    ecloud_methods!(get HostGroup, &str => get_host_group);
    ecloud_methods!(create HostGroup => create_host_group);
    ecloud_methods!(patch HostGroup, &str => patch_host_group);
    ecloud_methods!(delete HostGroup, &str => delete_host_group);
    ecloud_methods!(
        children HostGroup, &str => Host,
        get_host_group_hosts, get_host_group_hosts_paginated
    );
    ecloud_methods!(
        children HostGroup, &str => Task,
        get_host_group_tasks, get_host_group_tasks_paginated
    );

    ecloud_methods!(list Host => get_hosts, get_hosts_paginated);
    ecloud_methods!(get Host, &str => get_host);

    // SSH key pairs
    ecloud_methods!(list SshKeyPair => get_ssh_key_pairs, get_ssh_key_pairs_paginated);
    ecloud_methods!(get SshKeyPair, &str => get_ssh_key_pair);
    ecloud_methods!(create SshKeyPair => create_ssh_key_pair);
    ecloud_methods!(patch SshKeyPair, &str => patch_ssh_key_pair);
    ecloud_methods!(delete SshKeyPair, &str => delete_ssh_key_pair);

    // DHCP
    ecloud_methods!(list Dhcp => get_dhcps, get_dhcps_paginated);
    ecloud_methods!(get Dhcp, &str => get_dhcp);
    ecloud_methods!(children Dhcp, &str => Task, get_dhcp_tasks, get_dhcp_tasks_paginated);

    // Tasks
    ecloud_methods!(list Task => get_tasks, get_tasks_paginated);
    ecloud_methods!(get Task, &str => get_task);

    // v1: virtual machines
    ecloud_methods!(list VirtualMachine => get_virtual_machines, get_virtual_machines_paginated);
    ecloud_methods!(get VirtualMachine, i64 => get_virtual_machine);
    ecloud_methods!(create VirtualMachine => create_virtual_machine);
    ecloud_methods!(patch VirtualMachine, i64 => patch_virtual_machine);
    ecloud_methods!(delete VirtualMachine, i64 => delete_virtual_machine);
    ecloud_methods!(action VirtualMachine, i64, "power-on" => power_on_virtual_machine -> ());
    ecloud_methods!(action VirtualMachine, i64, "power-off" => power_off_virtual_machine -> ());
    ecloud_methods!(action VirtualMachine, i64, "power-reset" => reset_virtual_machine -> ());
    ecloud_methods!(action VirtualMachine, i64, "power-shutdown" => shutdown_virtual_machine -> ());
    ecloud_methods!(action VirtualMachine, i64, "power-restart" => restart_virtual_machine -> ());

    // v1: solutions
    ecloud_methods!(list Solution => get_solutions, get_solutions_paginated);
    ecloud_methods!(get Solution, i64 => get_solution);
    ecloud_methods!(patch Solution, i64 => patch_solution);
    ecloud_methods!(
        children Solution, i64 => VirtualMachine,
        get_solution_virtual_machines, get_solution_virtual_machines_paginated
    );
    ecloud_methods!(
        children Solution, i64 => Site,
        get_solution_sites, get_solution_sites_paginated
    );
    ecloud_methods!(
        children Solution, i64 => Datastore,
        get_solution_datastores, get_solution_datastores_paginated
    );

    // v1: sites / pods / datastores / appliances
    ecloud_methods!(list Site => get_sites, get_sites_paginated);
    ecloud_methods!(get Site, i64 => get_site);

    ecloud_methods!(list Pod => get_pods, get_pods_paginated);
    ecloud_methods!(get Pod, i64 => get_pod);
    ecloud_methods!(
        children Pod, i64 => Appliance,
        get_pod_appliances, get_pod_appliances_paginated
    );

    ecloud_methods!(list Datastore => get_datastores, get_datastores_paginated);
    ecloud_methods!(get Datastore, i64 => get_datastore);

    ecloud_methods!(list Appliance => get_appliances, get_appliances_paginated);
    ecloud_methods!(get Appliance, &str => get_appliance);
}

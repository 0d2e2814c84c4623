// Topology discovery against scripted management replies.
#![allow(clippy::unwrap_used)]

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use common::{ScriptedTransport, domain, root_resource, standalone};
use jbossctl_core::{Controller, CoreError, LaunchType, ServerStatus};

#[tokio::test]
async fn test_standalone_yields_one_synthetic_master_host() {
    let (transport, controller) = standalone("serie1cabrio").await;

    assert!(!controller.is_domain());
    assert_eq!(controller.launch_type(), LaunchType::Standalone);
    assert_eq!(controller.name(), "serie1cabrio");

    let hosts = controller.hosts();
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].name, "serie1cabrio");
    assert!(hosts[0].master);
    assert!(hosts[0].instances.is_empty());
    assert_eq!(controller.instances().count(), 0);

    assert_eq!(
        transport.calls(),
        vec![
            json!({ "operation": "read-resource", "recursive-depth": 1, "include-runtime": true }),
            json!({ "operation": "read-attribute", "name": "launch-type" }),
        ]
    );
}

#[tokio::test]
async fn test_standalone_reads_product_and_properties() {
    let (_, controller) = standalone("serie1cabrio").await;

    assert_eq!(controller.product().product_name.as_deref(), Some("JBoss EAP"));
    assert_eq!(controller.product().product_version.as_deref(), Some("7.4.0.GA"));

    let props = controller.system_properties();
    assert_eq!(props.len(), 2);
    assert_eq!(props[0].name, "env");
    assert!(props[0].boot_time);
    assert!(!props[1].boot_time);
    assert!(controller.topology().local_host_name.is_none());
}

#[tokio::test]
async fn test_domain_instances_belong_to_non_master_host() {
    let (transport, controller) = domain().await;

    assert!(controller.is_domain());
    assert_eq!(controller.hosts().len(), 2);
    assert_eq!(controller.topology().local_host_name.as_deref(), Some("master"));

    let master = controller.find_host("master").unwrap();
    assert!(master.master);
    assert!(master.instances.is_empty());

    let instances: Vec<_> = controller.instances().collect();
    assert_eq!(instances.len(), 2);
    assert!(instances.iter().all(|i| i.host == "slave"));
    assert_eq!(instances[0].name, "server-one");
    assert_eq!(instances[0].server_group, "main-server-group");
    assert_eq!(instances[0].status, ServerStatus::Started);
    assert_eq!(instances[1].status, ServerStatus::Stopped);

    let calls = transport.calls();
    assert_eq!(calls.len(), common::DOMAIN_DISCOVERY_CALLS);
    assert_eq!(
        calls[2],
        json!({ "operation": "read-children-names", "child-type": "host" })
    );
    assert_eq!(
        calls[3],
        json!({ "operation": "read-resource", "include-runtime": true, "address": ["host", "master"] })
    );
    assert_eq!(
        calls[5],
        json!({
            "operation": "read-children-resources",
            "child-type": "server-config",
            "include-runtime": true,
            "address": ["host", "slave"]
        })
    );
}

#[tokio::test]
async fn test_domain_host_without_server_configs_has_no_instances() {
    let transport = ScriptedTransport::default();
    transport
        .success(root_resource("Unnamed Domain", "DOMAIN"))
        .success(json!("DOMAIN"))
        .success(json!(["master", "fresh"]))
        .success(json!({ "master": true }))
        .success(json!({ "master": false }))
        .failure("WFLYCTL0030: No resource definition is registered for address");

    let controller = Controller::with_transport(transport.clone()).await.unwrap();

    assert_eq!(controller.hosts().len(), 2);
    assert_eq!(controller.instances().count(), 0);
    assert_eq!(controller.find_host("fresh").unwrap().name, "fresh");
}

#[tokio::test]
async fn test_unreachable_controller_fails_discovery() {
    let transport = ScriptedTransport::default();
    transport.unreachable();

    let err = Controller::with_transport(transport).await.err().unwrap();

    assert!(err.is_server_error());
    assert!(err.message().starts_with("Error requesting"));
}

#[tokio::test]
async fn test_unknown_launch_type_is_cli_error() {
    let transport = ScriptedTransport::default();
    transport
        .success(root_resource("x", "ADMIN_ONLY"))
        .success(json!("ADMIN_ONLY"));

    let err = Controller::with_transport(transport).await.err().unwrap();

    assert!(matches!(err, CoreError::Cli { .. }));
    assert_eq!(err.message(), "Unexpected payload for launch-type: ADMIN_ONLY");
}

#[tokio::test]
async fn test_expression_valued_properties_survive_discovery() {
    let mut root = root_resource("serie1cabrio", "STANDALONE");
    root["system-property"]["home"] = json!({
        "value": { "EXPRESSION_VALUE": "${jboss.home.dir}" },
        "boot-time": { "EXPRESSION_VALUE": "${boot.flag:true}" }
    });
    let transport = ScriptedTransport::default();
    transport.success(root).success(json!("STANDALONE"));

    let controller = Controller::with_transport(transport).await.unwrap();

    let home = controller
        .system_properties()
        .iter()
        .find(|p| p.name == "home")
        .unwrap();
    assert_eq!(home.value, "${jboss.home.dir}");
    assert!(home.boot_time);
}

#[tokio::test]
async fn test_instance_lookup() {
    let (_, controller) = domain().await;

    assert_eq!(
        controller.find_instance("slave", "server-two").unwrap().name,
        "server-two"
    );
    assert!(matches!(
        controller.find_instance("slave", "server-three"),
        Err(CoreError::NotFound { .. })
    ));
}

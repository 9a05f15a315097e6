//! End-to-end runs through an endpoint backed by the in-memory cloud

use std::sync::Arc;

use cloudbus_common::{
    Body, Header, Keypair, Kind, Message, MessageExt, Network, Operation, Router,
};
use cloudbus_producer::{Endpoint, InMemoryCloud, Producer, ProducerConfig};

fn endpoint() -> Endpoint {
    Endpoint::new(Arc::new(InMemoryCloud::new()), ProducerConfig::default())
}

#[tokio::test]
async fn network_lifecycle() {
    let endpoint = endpoint();
    let producer = endpoint.create_producer(Kind::Network);
    assert_eq!(producer.kind(), Kind::Network);

    let mut msg = Message::new()
        .with_header(Header::Operation, Operation::Create)
        .with_header(Header::Name, "backend")
        .with_header(Header::NetworkType, "vxlan")
        .with_header(Header::SegmentId, "1001");
    producer.process(&mut msg).await;

    assert!(!msg.is_fault());
    let created = msg.body_as::<Network>().unwrap();
    let id = created.id.clone().unwrap();
    assert_eq!(created.segment_id.as_deref(), Some("1001"));

    let mut msg = Message::new()
        .with_header(Header::Operation, Operation::Get)
        .with_header(Header::NetworkId, id.as_str());
    producer.process(&mut msg).await;
    assert_eq!(msg.body_as::<Network>(), Ok(created));

    let mut msg = Message::new().with_header(Header::Operation, Operation::GetAll);
    producer.process(&mut msg).await;
    assert!(matches!(
        msg.body(),
        Body::Sequence { kind: Kind::Network, items } if items.len() == 1
    ));

    let mut msg = Message::new()
        .with_header(Header::Operation, Operation::Delete)
        .with_header(Header::Id, id.as_str());
    producer.process(&mut msg).await;
    assert!(!msg.is_fault());

    let mut msg = Message::new()
        .with_header(Header::Operation, Operation::Get)
        .with_header(Header::Id, id.as_str());
    producer.process(&mut msg).await;
    assert!(msg.is_fault());
    assert_eq!(msg.body().as_text(), Some(format!("not found: {}", id).as_str()));
}

#[tokio::test]
async fn router_update_round_trip() {
    let endpoint = endpoint();
    let producer = endpoint.create_producer(Kind::Router);

    let mut msg = Message::new()
        .with_header(Header::Operation, Operation::Create)
        .with_header(Header::Name, "edge");
    producer.process(&mut msg).await;
    let created = msg.body_as::<Router>().unwrap();

    let renamed = Router {
        name: Some("edge-2".to_string()),
        admin_state_up: Some(true),
        ..created.clone()
    };
    let mut msg = Message::new()
        .with_header(Header::Operation, Operation::Update)
        .with_body(Body::resource(renamed.clone()));
    producer.process(&mut msg).await;

    assert!(!msg.is_fault());
    assert_eq!(msg.body_as::<Router>(), Ok(renamed));
    assert_eq!(msg.body_as::<Router>().unwrap().id, created.id);
}

#[tokio::test]
async fn update_of_unknown_router_faults() {
    let endpoint = endpoint();
    let producer = endpoint.create_producer(Kind::Router);

    let mut msg = Message::new()
        .with_header(Header::Operation, Operation::Update)
        .with_body(Body::resource(Router {
            id: Some("ghost".to_string()),
            ..Default::default()
        }));
    producer.process(&mut msg).await;

    assert!(msg.is_fault());
    assert_eq!(msg.body().as_text(), Some("update returned no resource"));
}

#[tokio::test]
async fn delete_unknown_port_reports_remote_failure() {
    let endpoint = endpoint();
    let producer = endpoint.create_producer(Kind::Port);

    let mut msg = Message::new()
        .with_header(Header::Operation, Operation::Delete)
        .with_header(Header::Id, "nope");
    producer.process(&mut msg).await;

    assert!(msg.is_fault());
    assert_eq!(msg.body().as_text(), Some("404: port nope not found"));
}

#[tokio::test]
async fn keypair_generated_then_duplicate_rejected() {
    let endpoint = endpoint();
    let producer = endpoint.create_producer(Kind::Keypair);

    let create = || {
        Message::new()
            .with_header(Header::Operation, Operation::Create)
            .with_header(Header::Name, "deploy")
    };

    let mut msg = create();
    producer.process(&mut msg).await;
    let keypair = msg.body_as::<Keypair>().unwrap();
    assert_eq!(keypair.name, "deploy");
    assert!(keypair.private_key.is_some());
    assert!(keypair.fingerprint.is_some());

    let mut msg = create();
    producer.process(&mut msg).await;
    assert!(msg.is_fault());
    assert_eq!(msg.body().as_text(), Some("409: keypair deploy already exists"));

    let mut msg = Message::new()
        .with_header(Header::Operation, Operation::Get)
        .with_header(Header::Name, "deploy");
    producer.process(&mut msg).await;
    let stored = msg.body_as::<Keypair>().unwrap();
    assert_eq!(stored.private_key, None);
    assert_eq!(stored.public_key, keypair.public_key);
}

#[tokio::test]
async fn default_operation_from_config() {
    let config = ProducerConfig::from_toml(r#"operation = "getAll""#).unwrap();
    let endpoint = Endpoint::new(Arc::new(InMemoryCloud::new()), config);
    assert_eq!(endpoint.config().operation, Some(Operation::GetAll));

    let producer = endpoint.create_producer(Kind::Subnet);
    let mut msg = Message::new();
    producer.process(&mut msg).await;

    assert!(!msg.is_fault());
    assert_eq!(
        msg.body(),
        &Body::Sequence {
            kind: Kind::Subnet,
            items: vec![],
        }
    );
}

#[tokio::test]
async fn messages_survive_json_transport() {
    let endpoint = endpoint();
    let producer = endpoint.create_producer(Kind::Network);

    let wire = r#"{
        "headers": {"operation": "create", "name": "over-the-wire", "isShared": true},
        "body": {"type": "empty"}
    }"#;
    let mut msg: Message = serde_json::from_str(wire).unwrap();
    producer.process(&mut msg).await;
    assert!(!msg.is_fault());

    let reply: Message = serde_json::from_str(&serde_json::to_string(&msg).unwrap()).unwrap();
    let network = reply.body_as::<Network>().unwrap();
    assert_eq!(network.name.as_deref(), Some("over-the-wire"));
    assert_eq!(network.shared, Some(true));
    assert_eq!(reply.into_body(), Body::resource(network));
}

#[tokio::test]
async fn every_kind_has_a_producer() {
    let endpoint = endpoint();

    for kind in Kind::ALL {
        let producer = endpoint.create_producer(kind);
        assert_eq!(producer.kind(), kind);

        let mut msg = Message::new().with_header(Header::Operation, Operation::GetAll);
        producer.process(&mut msg).await;

        assert!(!msg.is_fault());
        assert_eq!(
            msg.into_body(),
            Body::Sequence {
                kind,
                items: vec![],
            }
        );
    }
}

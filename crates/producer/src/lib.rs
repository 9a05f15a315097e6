//! CloudBus Producers
//!
//! Message-driven producers for a cloud control API. A producer reads the
//! `operation` header of a message, builds or takes the request, calls the
//! matching service on a [`CloudClient`] and writes the result, or a fault,
//! back onto the message.
//!
//! ```ignore
//! use std::sync::Arc;
//! use cloudbus_common::{Header, Kind, Message};
//! use cloudbus_producer::{Endpoint, InMemoryCloud, ProducerConfig};
//!
//! let endpoint = Endpoint::new(Arc::new(InMemoryCloud::new()), ProducerConfig::default());
//! let producer = endpoint.create_producer(Kind::Network);
//!
//! let mut msg = Message::new()
//!     .with_header(Header::Operation, "create")
//!     .with_header(Header::Name, "backend");
//! producer.process(&mut msg).await;
//! ```

pub mod client;
pub mod config;
pub mod dispatch;
pub mod memory;
pub mod producer;
pub mod resources;

pub use client::{ClientError, ClientResult, CloudClient, Service};
pub use config::{init_logging, LoggingConfig, ProducerConfig};
pub use dispatch::dispatch;
pub use memory::InMemoryCloud;
pub use producer::{
    Endpoint, KeypairProducer, NetworkProducer, PortProducer, Producer, ResourceProducer,
    RouterProducer, SubnetProducer,
};
pub use resources::KindBinding;

//! Producers and the endpoint that creates them

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use cloudbus_common::{Kind, MessageAdapter, Operation, Resource};
use crate::client::CloudClient;
use crate::config::ProducerConfig;
use crate::dispatch::dispatch;
use crate::resources::{
    KeypairBinding, KindBinding, NetworkBinding, PortBinding, RouterBinding, SubnetBinding,
};

/// Consumes a message and performs the requested cloud operation on its behalf.
///
/// `process` never fails: every error ends up as a fault on the message.
#[async_trait]
pub trait Producer: Send + Sync {
    fn kind(&self) -> Kind;

    async fn process(&self, message: &mut dyn MessageAdapter);
}

/// Producer for the resource kind bound by `B`
pub struct ResourceProducer<B> {
    client: Arc<dyn CloudClient>,
    default_operation: Option<Operation>,
    binding: PhantomData<fn() -> B>,
}

impl<B: KindBinding> ResourceProducer<B> {
    pub fn new(client: Arc<dyn CloudClient>) -> Self {
        Self {
            client,
            default_operation: None,
            binding: PhantomData,
        }
    }

    /// Operation used for messages without an `operation` header
    pub fn with_default_operation(mut self, operation: Option<Operation>) -> Self {
        self.default_operation = operation;
        self
    }
}

#[async_trait]
impl<B: KindBinding> Producer for ResourceProducer<B> {
    fn kind(&self) -> Kind {
        <B::Resource as Resource>::KIND
    }

    async fn process(&self, message: &mut dyn MessageAdapter) {
        dispatch::<B>(self.client.as_ref(), message, self.default_operation).await
    }
}

pub type PortProducer = ResourceProducer<PortBinding>;
pub type SubnetProducer = ResourceProducer<SubnetBinding>;
pub type NetworkProducer = ResourceProducer<NetworkBinding>;
pub type RouterProducer = ResourceProducer<RouterBinding>;
pub type KeypairProducer = ResourceProducer<KeypairBinding>;

/// A cloud endpoint: one shared client plus producer configuration
pub struct Endpoint {
    client: Arc<dyn CloudClient>,
    config: ProducerConfig,
}

impl Endpoint {
    pub fn new(client: Arc<dyn CloudClient>, config: ProducerConfig) -> Self {
        if let Some(operation) = config.operation {
            info!("Endpoint default operation: {}", operation);
        }
        Self { client, config }
    }

    pub fn config(&self) -> &ProducerConfig {
        &self.config
    }

    /// Create the producer for a resource kind
    pub fn create_producer(&self, kind: Kind) -> Box<dyn Producer> {
        debug!("Creating {} producer", kind);

        match kind {
            Kind::Port => self.producer::<PortBinding>(),
            Kind::Subnet => self.producer::<SubnetBinding>(),
            Kind::Network => self.producer::<NetworkBinding>(),
            Kind::Router => self.producer::<RouterBinding>(),
            Kind::Keypair => self.producer::<KeypairBinding>(),
        }
    }

    fn producer<B: KindBinding>(&self) -> Box<dyn Producer> {
        Box::new(
            ResourceProducer::<B>::new(self.client.clone())
                .with_default_operation(self.config.operation),
        )
    }
}

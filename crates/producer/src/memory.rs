//! In-memory cloud
//!
//! A [`CloudClient`] backed by process memory. IDs are UUID v4, lists come
//! back in insertion order. Useful for wiring tests and local runs without
//! a real cloud behind the producers.

use async_trait::async_trait;
use base64::Engine;
use ed25519_dalek::SigningKey;
use parking_lot::RwLock;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use tracing::debug;
use uuid::Uuid;

use cloudbus_common::{
    ActionResponse, Keypair, KeypairRequest, Network, Port, Resource, Router, Subnet,
};
use crate::client::{ClientError, ClientResult, CloudClient, Service};

/// Store for kinds that are created from a full resource value
pub struct MemoryService<R> {
    items: RwLock<Vec<R>>,
}

impl<R> Default for MemoryService<R> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<R: Resource> MemoryService<R> {
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

#[async_trait]
impl<R> Service<R> for MemoryService<R>
where
    R: Resource<CreateRequest = R>,
{
    async fn create(&self, mut request: R) -> ClientResult<Option<R>> {
        let id = Uuid::new_v4().to_string();
        request.assign_id(id.clone());
        self.items.write().push(request.clone());

        debug!("Created {} {}", R::KIND, id);

        Ok(Some(request))
    }

    async fn get(&self, id: &str) -> ClientResult<Option<R>> {
        Ok(self.items.read().iter().find(|r| r.id() == Some(id)).cloned())
    }

    async fn list(&self) -> ClientResult<Vec<R>> {
        Ok(self.items.read().clone())
    }

    async fn update(&self, resource: R) -> ClientResult<Option<R>> {
        let Some(id) = resource.id() else {
            return Ok(None);
        };

        let mut items = self.items.write();
        match items.iter_mut().find(|r| r.id() == Some(id)) {
            Some(slot) => {
                *slot = resource.clone();
                debug!("Updated {} {}", R::KIND, id);
                Ok(Some(resource))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> ClientResult<ActionResponse> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|r| r.id() != Some(id));

        if items.len() == before {
            return Ok(ActionResponse::failed(format!("{} {} not found", R::KIND, id), 404));
        }

        debug!("Deleted {} {}", R::KIND, id);
        Ok(ActionResponse::success())
    }
}

/// Keypair store. Keypairs are keyed by name and have no update.
#[derive(Default)]
pub struct KeypairStore {
    items: RwLock<Vec<Keypair>>,
}

impl KeypairStore {
    fn fingerprint(public_key: &str) -> String {
        hex::encode(Sha256::digest(public_key.as_bytes()))
    }

    /// Generate a fresh Ed25519 key pair. The public half is rendered as
    /// `ssh-ed25519 <base64 raw key>`, the private half as hex.
    fn generate(name: String) -> Keypair {
        let signing_key = SigningKey::generate(&mut OsRng);
        let public_key = format!(
            "ssh-ed25519 {}",
            base64::engine::general_purpose::STANDARD
                .encode(signing_key.verifying_key().to_bytes())
        );

        Keypair {
            name,
            fingerprint: Some(Self::fingerprint(&public_key)),
            public_key: Some(public_key),
            private_key: Some(hex::encode(signing_key.to_bytes())),
            user_id: None,
        }
    }
}

#[async_trait]
impl Service<Keypair> for KeypairStore {
    async fn create(&self, request: KeypairRequest) -> ClientResult<Option<Keypair>> {
        let mut items = self.items.write();
        if items.iter().any(|k| k.name == request.name) {
            return Err(ClientError::api(
                format!("keypair {} already exists", request.name),
                409,
            ));
        }

        let keypair = match request.public_key {
            Some(public_key) => Keypair {
                name: request.name,
                fingerprint: Some(Self::fingerprint(&public_key)),
                public_key: Some(public_key),
                private_key: None,
                user_id: None,
            },
            None => Self::generate(request.name),
        };

        // The private key is only ever returned once, from create.
        items.push(Keypair {
            private_key: None,
            ..keypair.clone()
        });

        debug!("Created keypair {}", keypair.name);
        Ok(Some(keypair))
    }

    async fn get(&self, name: &str) -> ClientResult<Option<Keypair>> {
        Ok(self.items.read().iter().find(|k| k.name == name).cloned())
    }

    async fn list(&self) -> ClientResult<Vec<Keypair>> {
        Ok(self.items.read().clone())
    }

    async fn delete(&self, name: &str) -> ClientResult<ActionResponse> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|k| k.name != name);

        if items.len() == before {
            return Ok(ActionResponse::failed(format!("keypair {} not found", name), 404));
        }
        Ok(ActionResponse::success())
    }
}

/// In-memory implementation of the whole client facade
#[derive(Default)]
pub struct InMemoryCloud {
    pub ports: MemoryService<Port>,
    pub subnets: MemoryService<Subnet>,
    pub networks: MemoryService<Network>,
    pub routers: MemoryService<Router>,
    pub keypairs: KeypairStore,
}

impl InMemoryCloud {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CloudClient for InMemoryCloud {
    fn ports(&self) -> &dyn Service<Port> {
        &self.ports
    }

    fn subnets(&self) -> &dyn Service<Subnet> {
        &self.subnets
    }

    fn networks(&self) -> &dyn Service<Network> {
        &self.networks
    }

    fn routers(&self) -> &dyn Service<Router> {
        &self.routers
    }

    fn keypairs(&self) -> &dyn Service<Keypair> {
        &self.keypairs
    }
}

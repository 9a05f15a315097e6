//! Recording stubs for the client facade

#![allow(dead_code)]

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use cloudbus_common::{ActionResponse, Keypair, Network, Port, Resource, Router, Subnet};
use cloudbus_producer::{ClientError, ClientResult, CloudClient, Service};

/// A call received by a [`StubService`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call<R: Resource> {
    Create(R::CreateRequest),
    Get(String),
    List,
    Update(R),
    Delete(String),
}

/// Service stub returning canned answers and recording every call
pub struct StubService<R: Resource> {
    calls: Mutex<Vec<Call<R>>>,
    created: Mutex<Option<R>>,
    found: Mutex<Option<R>>,
    listed: Mutex<Vec<R>>,
    updated: Mutex<Option<R>>,
    deletes: Mutex<VecDeque<ActionResponse>>,
    failure: Mutex<Option<ClientError>>,
}

impl<R: Resource> Default for StubService<R> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            created: Mutex::new(None),
            found: Mutex::new(None),
            listed: Mutex::new(Vec::new()),
            updated: Mutex::new(None),
            deletes: Mutex::new(VecDeque::new()),
            failure: Mutex::new(None),
        }
    }
}

impl<R: Resource> StubService<R>
where
    R::CreateRequest: Clone,
{
    pub fn on_create(&self, resource: R) {
        *self.created.lock() = Some(resource);
    }

    pub fn on_get(&self, resource: R) {
        *self.found.lock() = Some(resource);
    }

    pub fn on_list(&self, resources: Vec<R>) {
        *self.listed.lock() = resources;
    }

    pub fn on_update(&self, resource: R) {
        *self.updated.lock() = Some(resource);
    }

    /// Queue delete answers, consumed one per call
    pub fn on_delete(&self, response: ActionResponse) {
        self.deletes.lock().push_back(response);
    }

    /// Make every call fail with `error`
    pub fn fail_with(&self, error: ClientError) {
        *self.failure.lock() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call<R>> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call<R>) -> ClientResult<()> {
        self.calls.lock().push(call);
        match self.failure.lock().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<R: Resource> Service<R> for StubService<R>
where
    R::CreateRequest: Clone,
{
    async fn create(&self, request: R::CreateRequest) -> ClientResult<Option<R>> {
        self.record(Call::Create(request))?;
        Ok(self.created.lock().clone())
    }

    async fn get(&self, id: &str) -> ClientResult<Option<R>> {
        self.record(Call::Get(id.to_string()))?;
        Ok(self.found.lock().clone())
    }

    async fn list(&self) -> ClientResult<Vec<R>> {
        self.record(Call::List)?;
        Ok(self.listed.lock().clone())
    }

    /// Echoes the argument unless an answer was configured
    async fn update(&self, resource: R) -> ClientResult<Option<R>> {
        self.record(Call::Update(resource.clone()))?;
        Ok(Some(self.updated.lock().clone().unwrap_or(resource)))
    }

    async fn delete(&self, id: &str) -> ClientResult<ActionResponse> {
        self.record(Call::Delete(id.to_string()))?;
        Ok(self
            .deletes
            .lock()
            .pop_front()
            .unwrap_or(ActionResponse::Success))
    }
}

/// Client facade made of stubs
#[derive(Default)]
pub struct StubCloud {
    pub ports: StubService<Port>,
    pub subnets: StubService<Subnet>,
    pub networks: StubService<Network>,
    pub routers: StubService<Router>,
    pub keypairs: StubService<Keypair>,
}

impl CloudClient for StubCloud {
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

//! Router binding

use cloudbus_common::{Header, MessageAdapter, Operation, Result, Router};
use super::{optional, required_text, KindBinding};
use crate::client::{CloudClient, Service};

pub struct RouterBinding;

impl KindBinding for RouterBinding {
    type Resource = Router;

    const OPERATIONS: &'static [Operation] = &[
        Operation::Create,
        Operation::Get,
        Operation::GetAll,
        Operation::Update,
        Operation::Delete,
    ];

    const ID_HEADER: Option<Header> = Some(Header::RouterId);

    fn service(client: &dyn CloudClient) -> &dyn Service<Router> {
        client.routers()
    }

    fn build(message: &dyn MessageAdapter) -> Result<Router> {
        Ok(Router {
            id: None,
            name: Some(required_text::<Router>(message, Header::Name)?),
            tenant_id: optional(message, Header::TenantId)?,
            admin_state_up: optional(message, Header::AdminStateUp)?,
            status: None,
        })
    }
}

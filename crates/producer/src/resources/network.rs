//! Network binding

use cloudbus_common::{Header, MessageAdapter, Network, Operation, Result};
use super::{optional, required_text, KindBinding};
use crate::client::{CloudClient, Service};

pub struct NetworkBinding;

impl KindBinding for NetworkBinding {
    type Resource = Network;

    const OPERATIONS: &'static [Operation] = &[
        Operation::Create,
        Operation::Get,
        Operation::GetAll,
        Operation::Delete,
    ];

    const ID_HEADER: Option<Header> = Some(Header::NetworkId);

    fn service(client: &dyn CloudClient) -> &dyn Service<Network> {
        client.networks()
    }

    fn build(message: &dyn MessageAdapter) -> Result<Network> {
        Ok(Network {
            id: None,
            name: Some(required_text::<Network>(message, Header::Name)?),
            tenant_id: optional(message, Header::TenantId)?,
            admin_state_up: optional(message, Header::AdminStateUp)?,
            network_type: optional(message, Header::NetworkType)?,
            physical_network: optional(message, Header::PhysicalNetwork)?,
            segment_id: optional(message, Header::SegmentId)?,
            shared: optional(message, Header::IsShared)?,
            router_external: optional(message, Header::IsRouterExternal)?,
            status: None,
        })
    }
}

//! Port binding

use cloudbus_common::{Header, MessageAdapter, Operation, Port, Result};
use super::{optional, KindBinding};
use crate::client::{CloudClient, Service};

pub struct PortBinding;

impl KindBinding for PortBinding {
    type Resource = Port;

    const OPERATIONS: &'static [Operation] = &[
        Operation::Create,
        Operation::Get,
        Operation::GetAll,
        Operation::Update,
        Operation::Delete,
    ];

    fn service(client: &dyn CloudClient) -> &dyn Service<Port> {
        client.ports()
    }

    // Every field is optional here; the remote API rejects bad combinations.
    fn build(message: &dyn MessageAdapter) -> Result<Port> {
        Ok(Port {
            id: None,
            name: optional(message, Header::Name)?,
            tenant_id: optional(message, Header::TenantId)?,
            network_id: optional(message, Header::NetworkId)?,
            mac_address: optional(message, Header::MacAddress)?,
            device_id: optional(message, Header::DeviceId)?,
        })
    }
}

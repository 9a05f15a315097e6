//! Subnet binding

use cloudbus_common::{Header, MessageAdapter, Operation, Result, Subnet};
use super::{optional, required, required_text, KindBinding};
use crate::client::{CloudClient, Service};

pub struct SubnetBinding;

impl KindBinding for SubnetBinding {
    type Resource = Subnet;

    const OPERATIONS: &'static [Operation] = &[
        Operation::Create,
        Operation::Get,
        Operation::GetAll,
        Operation::Delete,
    ];

    const ID_HEADER: Option<Header> = Some(Header::SubnetId);

    fn service(client: &dyn CloudClient) -> &dyn Service<Subnet> {
        client.subnets()
    }

    fn build(message: &dyn MessageAdapter) -> Result<Subnet> {
        Ok(Subnet {
            id: None,
            name: Some(required_text::<Subnet>(message, Header::Name)?),
            network_id: Some(required_text::<Subnet>(message, Header::NetworkId)?),
            ip_version: Some(required::<_, Subnet>(message, Header::IpVersion)?),
            tenant_id: optional(message, Header::TenantId)?,
            cidr: optional(message, Header::Cidr)?,
            gateway_ip: optional(message, Header::Gateway)?,
            enable_dhcp: optional(message, Header::EnableDhcp)?,
        })
    }
}

//! Canonical operation and header names
//!
//! Both vocabularies are closed: the engine addresses headers through
//! [`Header`] only, so it cannot read a name outside the documented set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle operation requested by a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "create")]
    Create,
    #[serde(rename = "get")]
    Get,
    #[serde(rename = "getAll")]
    GetAll,
    #[serde(rename = "update")]
    Update,
    #[serde(rename = "delete")]
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Create,
        Operation::Get,
        Operation::GetAll,
        Operation::Update,
        Operation::Delete,
    ];

    /// Wire token carried in the `operation` header
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::GetAll => "getAll",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an operation token is not in the vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    // Tokens are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// Header names understood by the producers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Header {
    Operation,
    Id,
    Name,
    SubnetId,
    NetworkId,
    RouterId,
    TenantId,
    MacAddress,
    DeviceId,
    IpVersion,
    Cidr,
    Gateway,
    EnableDhcp,
    AdminStateUp,
    NetworkType,
    PhysicalNetwork,
    SegmentId,
    IsShared,
    IsRouterExternal,
}

impl Header {
    pub const ALL: [Header; 19] = [
        Header::Operation,
        Header::Id,
        Header::Name,
        Header::SubnetId,
        Header::NetworkId,
        Header::RouterId,
        Header::TenantId,
        Header::MacAddress,
        Header::DeviceId,
        Header::IpVersion,
        Header::Cidr,
        Header::Gateway,
        Header::EnableDhcp,
        Header::AdminStateUp,
        Header::NetworkType,
        Header::PhysicalNetwork,
        Header::SegmentId,
        Header::IsShared,
        Header::IsRouterExternal,
    ];

    /// Wire name of the header (case-sensitive)
    pub fn as_str(&self) -> &'static str {
        match self {
            Header::Operation => "operation",
            Header::Id => "ID",
            Header::Name => "name",
            Header::SubnetId => "subnetId",
            Header::NetworkId => "networkId",
            Header::RouterId => "routerId",
            Header::TenantId => "tenantId",
            Header::MacAddress => "macAddress",
            Header::DeviceId => "deviceId",
            Header::IpVersion => "ipVersion",
            Header::Cidr => "cidr",
            Header::Gateway => "gateway",
            Header::EnableDhcp => "enableDHCP",
            Header::AdminStateUp => "adminStateUp",
            Header::NetworkType => "networkType",
            Header::PhysicalNetwork => "physicalNetwork",
            Header::SegmentId => "segmentId",
            Header::IsShared => "isShared",
            Header::IsRouterExternal => "isRouterExternal",
        }
    }

    /// Look up a header by its wire name
    pub fn from_name(name: &str) -> Option<Header> {
        Header::ALL.into_iter().find(|h| h.as_str() == name)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

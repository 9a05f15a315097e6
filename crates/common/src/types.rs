//! Resource kinds and their values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cloud entity type handled by a producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Port,
    Subnet,
    Network,
    Router,
    Keypair,
}

impl Kind {
    pub const ALL: [Kind; 5] = [
        Kind::Port,
        Kind::Subnet,
        Kind::Network,
        Kind::Router,
        Kind::Keypair,
    ];
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Port => write!(f, "port"),
            Kind::Subnet => write!(f, "subnet"),
            Kind::Network => write!(f, "network"),
            Kind::Router => write!(f, "router"),
            Kind::Keypair => write!(f, "keypair"),
        }
    }
}

/// IP version of a subnet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            4 => Some(IpVersion::V4),
            6 => Some(IpVersion::V6),
            _ => None,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "V4"),
            IpVersion::V6 => write!(f, "V6"),
        }
    }
}

impl FromStr for IpVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v4" | "4" => Ok(IpVersion::V4),
            "v6" | "6" => Ok(IpVersion::V6),
            other => Err(format!("unknown ip version: {}", other)),
        }
    }
}

/// Provider network type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    Local,
    Flat,
    Vlan,
    Vxlan,
    Gre,
    Geneve,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Local => "local",
            NetworkType::Flat => "flat",
            NetworkType::Vlan => "vlan",
            NetworkType::Vxlan => "vxlan",
            NetworkType::Gre => "gre",
            NetworkType::Geneve => "geneve",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(NetworkType::Local),
            "flat" => Ok(NetworkType::Flat),
            "vlan" => Ok(NetworkType::Vlan),
            "vxlan" => Ok(NetworkType::Vxlan),
            "gre" => Ok(NetworkType::Gre),
            "geneve" => Ok(NetworkType::Geneve),
            other => Err(format!("unknown network type: {}", other)),
        }
    }
}

/// Network port
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Port {
    pub id: Option<String>,
    pub name: Option<String>,
    pub tenant_id: Option<String>,
    pub network_id: Option<String>,
    pub mac_address: Option<String>,
    pub device_id: Option<String>,
}

/// Subnet of a network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subnet {
    pub id: Option<String>,
    pub name: Option<String>,
    pub tenant_id: Option<String>,
    pub network_id: Option<String>,
    pub ip_version: Option<IpVersion>,
    pub cidr: Option<String>,
    pub gateway_ip: Option<String>,
    pub enable_dhcp: Option<bool>,
}

/// Virtual network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Network {
    pub id: Option<String>,
    pub name: Option<String>,
    pub tenant_id: Option<String>,
    pub admin_state_up: Option<bool>,
    pub network_type: Option<NetworkType>,
    pub physical_network: Option<String>,
    pub segment_id: Option<String>,
    pub shared: Option<bool>,
    pub router_external: Option<bool>,
    pub status: Option<String>,
}

/// Router between networks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Router {
    pub id: Option<String>,
    pub name: Option<String>,
    pub tenant_id: Option<String>,
    pub admin_state_up: Option<bool>,
    pub status: Option<String>,
}

/// SSH keypair. Keypairs are identified by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Keypair {
    pub name: String,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    pub fingerprint: Option<String>,
    pub user_id: Option<String>,
}

/// Arguments of a keypair create: a name and an optional existing public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypairRequest {
    pub name: String,
    pub public_key: Option<String>,
}

/// A resource value of any kind, as carried in a message body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceValue {
    Port(Port),
    Subnet(Subnet),
    Network(Network),
    Router(Router),
    Keypair(Keypair),
}

impl ResourceValue {
    pub fn kind(&self) -> Kind {
        match self {
            ResourceValue::Port(_) => Kind::Port,
            ResourceValue::Subnet(_) => Kind::Subnet,
            ResourceValue::Network(_) => Kind::Network,
            ResourceValue::Router(_) => Kind::Router,
            ResourceValue::Keypair(_) => Kind::Keypair,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            ResourceValue::Port(r) => r.id(),
            ResourceValue::Subnet(r) => r.id(),
            ResourceValue::Network(r) => r.id(),
            ResourceValue::Router(r) => r.id(),
            ResourceValue::Keypair(r) => r.id(),
        }
    }
}

/// A compile-time resource kind
pub trait Resource: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    const KIND: Kind;

    /// Argument accepted by the service's create method
    type CreateRequest: fmt::Debug + Send + Sync + 'static;

    /// Server-assigned identifier, if any
    fn id(&self) -> Option<&str>;

    /// Store a server-assigned identifier
    fn assign_id(&mut self, id: String);

    /// Turn a resource carried in a message body into a create request.
    /// `None` means the kind only creates through its dedicated header path.
    fn into_create_request(self) -> Option<Self::CreateRequest>;

    fn into_value(self) -> ResourceValue;

    fn from_value(value: &ResourceValue) -> Option<&Self>;
}

macro_rules! impl_resource {
    ($ty:ident, $kind:ident) => {
        impl Resource for $ty {
            const KIND: Kind = Kind::$kind;
            type CreateRequest = $ty;

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn assign_id(&mut self, id: String) {
                self.id = Some(id);
            }

            fn into_create_request(self) -> Option<Self::CreateRequest> {
                Some(self)
            }

            fn into_value(self) -> ResourceValue {
                ResourceValue::$kind(self)
            }

            fn from_value(value: &ResourceValue) -> Option<&Self> {
                match value {
                    ResourceValue::$kind(r) => Some(r),
                    _ => None,
                }
            }
        }
    };
}

impl_resource!(Port, Port);
impl_resource!(Subnet, Subnet);
impl_resource!(Network, Network);
impl_resource!(Router, Router);

impl Resource for Keypair {
    const KIND: Kind = Kind::Keypair;
    type CreateRequest = KeypairRequest;

    fn id(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn assign_id(&mut self, id: String) {
        self.name = id;
    }

    fn into_create_request(self) -> Option<Self::CreateRequest> {
        None
    }

    fn into_value(self) -> ResourceValue {
        ResourceValue::Keypair(self)
    }

    fn from_value(value: &ResourceValue) -> Option<&Self> {
        match value {
            ResourceValue::Keypair(k) => Some(k),
            _ => None,
        }
    }
}

/// Outcome of an operation that returns no resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionResponse {
    Success,
    Failed { message: String, code: u16 },
}

impl ActionResponse {
    pub fn success() -> Self {
        ActionResponse::Success
    }

    pub fn failed(message: impl Into<String>, code: u16) -> Self {
        ActionResponse::Failed {
            message: message.into(),
            code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionResponse::Success)
    }
}

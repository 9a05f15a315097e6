//! Client facade over the cloud control API

use async_trait::async_trait;
use thiserror::Error;

use cloudbus_common::{
    ActionResponse, Error, Keypair, Kind, Network, Operation, Port, Resource, Router, Subnet,
};

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Failure raised by the cloud client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The remote API rejected the call
    #[error("{code}: {message}")]
    Api { message: String, code: u16 },

    /// The call never produced a remote answer
    #[error("{0}")]
    Transport(String),

    #[error("operation {0} not supported")]
    Unsupported(Operation),
}

impl ClientError {
    pub fn api(message: impl Into<String>, code: u16) -> Self {
        ClientError::Api {
            message: message.into(),
            code,
        }
    }

    /// Translate into the fault recorded on the message
    pub fn into_fault(self, kind: Kind) -> Error {
        match self {
            ClientError::Api { message, code } => Error::RemoteFailed { message, code },
            ClientError::Transport(message) => Error::Remote(message),
            ClientError::Unsupported(operation) => Error::OperationNotSupported { operation, kind },
        }
    }
}

/// Lifecycle operations for one resource kind.
///
/// `create`, `get` and `update` return `None` when the remote answered
/// without a resource. Kinds without an update call keep the default.
#[async_trait]
pub trait Service<R: Resource>: Send + Sync {
    async fn create(&self, request: R::CreateRequest) -> ClientResult<Option<R>>;

    async fn get(&self, id: &str) -> ClientResult<Option<R>>;

    async fn list(&self) -> ClientResult<Vec<R>>;

    async fn update(&self, _resource: R) -> ClientResult<Option<R>> {
        Err(ClientError::Unsupported(Operation::Update))
    }

    async fn delete(&self, id: &str) -> ClientResult<ActionResponse>;
}

/// Root of the cloud API: one service per resource kind.
///
/// Implementations must be thread-safe; a single client is shared by every
/// producer of an endpoint.
pub trait CloudClient: Send + Sync {
    fn ports(&self) -> &dyn Service<Port>;

    fn subnets(&self) -> &dyn Service<Subnet>;

    fn networks(&self) -> &dyn Service<Network>;

    fn routers(&self) -> &dyn Service<Router>;

    fn keypairs(&self) -> &dyn Service<Keypair>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_remote_message() {
        let fault = ClientError::api("quota exceeded", 413).into_fault(Kind::Port);
        assert_eq!(fault.to_string(), "413: quota exceeded");
    }

    #[test]
    fn test_transport_error_is_verbatim() {
        let fault = ClientError::Transport("connection reset".into()).into_fault(Kind::Subnet);
        assert_eq!(fault, Error::Remote("connection reset".into()));
    }

    #[test]
    fn test_unsupported_names_the_kind() {
        let fault = ClientError::Unsupported(Operation::Update).into_fault(Kind::Network);
        assert_eq!(fault.to_string(), "operation update not supported for network");
    }
}

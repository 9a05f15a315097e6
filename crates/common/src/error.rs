//! Fault types for CloudBus producers

use thiserror::Error;

use crate::constants::{Header, Operation};
use crate::types::Kind;

/// Result type alias using CloudBus Error
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a dispatched operation can fail. The `Display` text is what
/// ends up in the body of a faulted message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("operation {operation} not supported for {kind}")]
    OperationNotSupported { operation: Operation, kind: Kind },

    #[error("missing header {header} for {operation} on {kind}")]
    MissingHeader {
        header: Header,
        operation: Operation,
        kind: Kind,
    },

    #[error("missing id header")]
    MissingId,

    #[error("header {header} has wrong type: expected {expected}")]
    HeaderType {
        header: Header,
        expected: &'static str,
    },

    #[error("expected {expected} body, found {found}")]
    BodyType { expected: Kind, found: String },

    #[error("not found: {id}")]
    NotFound { id: String },

    #[error("{code}: {message}")]
    RemoteFailed { message: String, code: u16 },

    #[error("{0}")]
    Remote(String),

    #[error("{operation} returned no resource")]
    EmptyResponse { operation: Operation },

    #[error("{operation} returned no ID")]
    MissingResultId { operation: Operation },
}

/// Fault classes, used to pick how loudly a fault is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCategory {
    /// Bad headers, body or operation supplied by the caller
    Caller,
    NotFound,
    /// Failure reported by the remote API or the client under it
    Remote,
    /// The remote or the client returned something it must not
    Invariant,
}

impl Error {
    pub fn category(&self) -> FaultCategory {
        match self {
            Error::UnsupportedOperation(_)
            | Error::OperationNotSupported { .. }
            | Error::MissingHeader { .. }
            | Error::MissingId
            | Error::HeaderType { .. }
            | Error::BodyType { .. } => FaultCategory::Caller,
            Error::NotFound { .. } => FaultCategory::NotFound,
            Error::RemoteFailed { .. } | Error::Remote(_) => FaultCategory::Remote,
            Error::EmptyResponse { .. } | Error::MissingResultId { .. } => {
                FaultCategory::Invariant
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_strings() {
        assert_eq!(
            Error::UnsupportedOperation("explode".into()).to_string(),
            "unsupported operation: explode"
        );
        assert_eq!(
            Error::MissingHeader {
                header: Header::NetworkId,
                operation: Operation::Create,
                kind: Kind::Subnet,
            }
            .to_string(),
            "missing header networkId for create on subnet"
        );
        assert_eq!(
            Error::OperationNotSupported {
                operation: Operation::Update,
                kind: Kind::Keypair,
            }
            .to_string(),
            "operation update not supported for keypair"
        );
        assert_eq!(
            Error::RemoteFailed {
                message: "fail".into(),
                code: 404,
            }
            .to_string(),
            "404: fail"
        );
        assert_eq!(
            Error::MissingResultId {
                operation: Operation::Create,
            }
            .to_string(),
            "create returned no ID"
        );
        assert_eq!(
            Error::NotFound { id: "abc".into() }.to_string(),
            "not found: abc"
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(Error::MissingId.category(), FaultCategory::Caller);
        assert_eq!(
            Error::NotFound { id: "x".into() }.category(),
            FaultCategory::NotFound
        );
        assert_eq!(Error::Remote("boom".into()).category(), FaultCategory::Remote);
        assert_eq!(
            Error::EmptyResponse {
                operation: Operation::Update,
            }
            .category(),
            FaultCategory::Invariant
        );
    }
}

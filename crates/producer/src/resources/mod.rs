//! Resource kind bindings
//!
//! Each kind binds to the dispatch engine through a [`KindBinding`]: the
//! operations it supports, the header that names its resources, the service
//! accessor on the client, and the function that builds a create request
//! from headers. The builders list every header they consume explicitly;
//! headers they do not name are ignored.

pub mod keypair;
pub mod network;
pub mod port;
pub mod router;
pub mod subnet;

use cloudbus_common::{
    Error, FromHeader, Header, MessageAdapter, MessageExt, Operation, Resource, Result,
};
use crate::client::{CloudClient, Service};

pub use keypair::KeypairBinding;
pub use network::NetworkBinding;
pub use port::PortBinding;
pub use router::RouterBinding;
pub use subnet::SubnetBinding;

/// Descriptor binding one resource kind to the dispatch engine
pub trait KindBinding: Send + Sync + 'static {
    type Resource: Resource;

    /// Operations the kind supports
    const OPERATIONS: &'static [Operation];

    /// Header consulted before `ID` when resolving a resource id
    const ID_HEADER: Option<Header> = None;

    fn service(client: &dyn CloudClient) -> &dyn Service<Self::Resource>;

    /// Build a create request from the message headers
    fn build(message: &dyn MessageAdapter) -> Result<<Self::Resource as Resource>::CreateRequest>;
}

/// Read an optional header
pub(crate) fn optional<T: FromHeader>(
    message: &dyn MessageAdapter,
    header: Header,
) -> Result<Option<T>> {
    message.header_as(header)
}

/// Read a header a create request cannot do without
pub(crate) fn required<T: FromHeader, R: Resource>(
    message: &dyn MessageAdapter,
    header: Header,
) -> Result<T> {
    optional(message, header)?.ok_or(Error::MissingHeader {
        header,
        operation: Operation::Create,
        kind: R::KIND,
    })
}

/// Like [`required`], an empty string counts as missing
pub(crate) fn required_text<R: Resource>(
    message: &dyn MessageAdapter,
    header: Header,
) -> Result<String> {
    match required::<String, R>(message, header)? {
        text if text.is_empty() => Err(Error::MissingHeader {
            header,
            operation: Operation::Create,
            kind: R::KIND,
        }),
        text => Ok(text),
    }
}

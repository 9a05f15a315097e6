//! Keypair binding
//!
//! Keypairs never build a resource for create. The request is the `name`
//! header plus, when the body is a non-empty string, that string as the
//! public key to import.

use cloudbus_common::{
    Header, Keypair, KeypairRequest, MessageAdapter, MessageExt, Operation, Result,
};
use super::{required_text, KindBinding};
use crate::client::{CloudClient, Service};

pub struct KeypairBinding;

impl KindBinding for KeypairBinding {
    type Resource = Keypair;

    const OPERATIONS: &'static [Operation] = &[
        Operation::Create,
        Operation::Get,
        Operation::GetAll,
        Operation::Delete,
    ];

    const ID_HEADER: Option<Header> = Some(Header::Name);

    fn service(client: &dyn CloudClient) -> &dyn Service<Keypair> {
        client.keypairs()
    }

    fn build(message: &dyn MessageAdapter) -> Result<KeypairRequest> {
        Ok(KeypairRequest {
            name: required_text::<Keypair>(message, Header::Name)?,
            public_key: message.body_text().map(str::to_string),
        })
    }
}

//! Dispatch engine
//!
//! One algorithm serves every resource kind, parameterised by its
//! [`KindBinding`]. Per message it reads the operation, builds or takes the
//! request, makes a single client call and writes the outcome back: either
//! a new body, or a diagnostic string with the fault flag set. Headers are
//! never written and nothing is kept between messages.

use tracing::{debug, error, warn};

use cloudbus_common::{
    ActionResponse, Body, Error, FaultCategory, Header, HeaderValue, MessageAdapter, MessageExt,
    Operation, Resource, Result, UnknownOperation,
};
use crate::client::{ClientError, CloudClient, Service};
use crate::resources::KindBinding;

/// What a successful operation does to the body
#[derive(Debug, PartialEq)]
enum Outcome {
    Replace(Body),
    Keep,
}

/// Run one message through the engine for the kind bound by `B`.
///
/// `default_operation` is used when the message has no `operation` header.
pub async fn dispatch<B: KindBinding>(
    client: &dyn CloudClient,
    message: &mut dyn MessageAdapter,
    default_operation: Option<Operation>,
) {
    let kind = <B::Resource as Resource>::KIND;

    match execute::<B>(client, &*message, default_operation).await {
        Ok(Outcome::Replace(body)) => {
            message.set_body(body);
            message.set_fault(false);
        }
        Ok(Outcome::Keep) => message.set_fault(false),
        Err(fault) => {
            match fault.category() {
                FaultCategory::Invariant => error!("{} producer: {}", kind, fault),
                _ => warn!("{} producer: {}", kind, fault),
            }
            message.set_body(Body::Text(fault.to_string()));
            message.set_fault(true);
        }
    }
}

async fn execute<B: KindBinding>(
    client: &dyn CloudClient,
    message: &dyn MessageAdapter,
    default_operation: Option<Operation>,
) -> Result<Outcome> {
    let kind = <B::Resource as Resource>::KIND;
    let operation = resolve_operation(message, default_operation)?;

    if !B::OPERATIONS.contains(&operation) {
        return Err(Error::OperationNotSupported { operation, kind });
    }

    debug!("Dispatching {} on {}", operation, kind);

    let service = B::service(client);
    match operation {
        Operation::Create => create::<B>(service, message).await,
        Operation::Get => get::<B>(service, message).await,
        Operation::GetAll => get_all::<B>(service).await,
        Operation::Update => update::<B>(service, message).await,
        Operation::Delete => delete::<B>(service, message).await,
    }
}

fn resolve_operation(
    message: &dyn MessageAdapter,
    default_operation: Option<Operation>,
) -> Result<Operation> {
    match message.header(Header::Operation) {
        None | Some(HeaderValue::Null) => {
            default_operation.ok_or_else(|| Error::UnsupportedOperation("(missing)".to_string()))
        }
        Some(HeaderValue::Text(token)) => token
            .parse()
            .map_err(|UnknownOperation(token)| Error::UnsupportedOperation(token)),
        Some(other) => Err(Error::UnsupportedOperation(other.to_string())),
    }
}

/// The kind's own id header wins over `ID`. Empty values count as absent.
fn resolve_id<B: KindBinding>(message: &dyn MessageAdapter) -> Result<String> {
    for header in B::ID_HEADER.into_iter().chain([Header::Id]) {
        if let Some(id) = message.header_as::<String>(header)? {
            if !id.is_empty() {
                return Ok(id);
            }
        }
    }
    Err(Error::MissingId)
}

fn fault<R: Resource>(err: ClientError) -> Error {
    err.into_fault(R::KIND)
}

/// A resource handed back by create or update must carry its server id
fn check_id<R: Resource>(resource: &R, operation: Operation) -> Result<()> {
    match resource.id() {
        Some(id) if !id.is_empty() => Ok(()),
        _ => Err(Error::MissingResultId { operation }),
    }
}

async fn create<B: KindBinding>(
    service: &dyn Service<B::Resource>,
    message: &dyn MessageAdapter,
) -> Result<Outcome> {
    let request = match message
        .typed_body::<B::Resource>()
        .and_then(Resource::into_create_request)
    {
        Some(request) => request,
        None => B::build(message)?,
    };

    let created = service
        .create(request)
        .await
        .map_err(fault::<B::Resource>)?
        .ok_or(Error::EmptyResponse {
            operation: Operation::Create,
        })?;
    check_id(&created, Operation::Create)?;

    Ok(Outcome::Replace(Body::resource(created)))
}

async fn get<B: KindBinding>(
    service: &dyn Service<B::Resource>,
    message: &dyn MessageAdapter,
) -> Result<Outcome> {
    let id = resolve_id::<B>(message)?;

    let found = service.get(&id).await.map_err(fault::<B::Resource>)?;
    match found {
        Some(found) => Ok(Outcome::Replace(Body::resource(found))),
        None => Err(Error::NotFound { id }),
    }
}

async fn get_all<B: KindBinding>(service: &dyn Service<B::Resource>) -> Result<Outcome> {
    let resources = service.list().await.map_err(fault::<B::Resource>)?;
    Ok(Outcome::Replace(Body::sequence(resources)))
}

async fn update<B: KindBinding>(
    service: &dyn Service<B::Resource>,
    message: &dyn MessageAdapter,
) -> Result<Outcome> {
    let resource = message.body_as::<B::Resource>()?;

    let updated = service
        .update(resource)
        .await
        .map_err(fault::<B::Resource>)?
        .ok_or(Error::EmptyResponse {
            operation: Operation::Update,
        })?;
    check_id(&updated, Operation::Update)?;

    Ok(Outcome::Replace(Body::resource(updated)))
}

async fn delete<B: KindBinding>(
    service: &dyn Service<B::Resource>,
    message: &dyn MessageAdapter,
) -> Result<Outcome> {
    let id = resolve_id::<B>(message)?;

    match service.delete(&id).await.map_err(fault::<B::Resource>)? {
        ActionResponse::Success => Ok(Outcome::Keep),
        ActionResponse::Failed { message, code } => {
            Err(Error::RemoteFailed { message, code })
        }
    }
}

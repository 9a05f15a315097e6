//! Message adapter
//!
//! A message is a mutable envelope of headers, a body and a fault flag.
//! Producers see it only through [`MessageAdapter`]: headers are read-only
//! there, only the body and the fault flag can be written.
//!
//! Typed access lives in [`MessageExt`], implemented for every adapter
//! (including `dyn MessageAdapter`). Its methods never panic; failures come
//! back as [`Error`] values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{Header, Operation};
use crate::error::{Error, Result};
use crate::types::{IpVersion, Kind, NetworkType, Resource, ResourceValue};

/// Value of a single header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl HeaderValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderValue::Null => write!(f, "null"),
            HeaderValue::Bool(b) => write!(f, "{}", b),
            HeaderValue::Int(n) => write!(f, "{}", n),
            HeaderValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(s: &str) -> Self {
        HeaderValue::Text(s.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(s: String) -> Self {
        HeaderValue::Text(s)
    }
}

impl From<bool> for HeaderValue {
    fn from(b: bool) -> Self {
        HeaderValue::Bool(b)
    }
}

impl From<i64> for HeaderValue {
    fn from(n: i64) -> Self {
        HeaderValue::Int(n)
    }
}

impl From<Operation> for HeaderValue {
    fn from(op: Operation) -> Self {
        HeaderValue::Text(op.as_str().to_string())
    }
}

impl From<IpVersion> for HeaderValue {
    fn from(v: IpVersion) -> Self {
        HeaderValue::Text(v.to_string())
    }
}

impl From<NetworkType> for HeaderValue {
    fn from(t: NetworkType) -> Self {
        HeaderValue::Text(t.as_str().to_string())
    }
}

/// Conversion from a header value into a typed value
pub trait FromHeader: Sized {
    /// Name used in type-mismatch diagnostics
    const TYPE_NAME: &'static str;

    fn from_header(value: &HeaderValue) -> Option<Self>;
}

impl FromHeader for String {
    const TYPE_NAME: &'static str = "string";

    fn from_header(value: &HeaderValue) -> Option<Self> {
        value.as_text().map(str::to_string)
    }
}

impl FromHeader for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_header(value: &HeaderValue) -> Option<Self> {
        match value {
            HeaderValue::Bool(b) => Some(*b),
            HeaderValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromHeader for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_header(value: &HeaderValue) -> Option<Self> {
        match value {
            HeaderValue::Int(n) => Some(*n),
            HeaderValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromHeader for Operation {
    const TYPE_NAME: &'static str = "operation";

    fn from_header(value: &HeaderValue) -> Option<Self> {
        value.as_text().and_then(|s| s.parse().ok())
    }
}

impl FromHeader for IpVersion {
    const TYPE_NAME: &'static str = "ip version";

    fn from_header(value: &HeaderValue) -> Option<Self> {
        match value {
            HeaderValue::Int(n) => IpVersion::from_number(*n),
            HeaderValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromHeader for NetworkType {
    const TYPE_NAME: &'static str = "network type";

    fn from_header(value: &HeaderValue) -> Option<Self> {
        value.as_text().and_then(|s| s.parse().ok())
    }
}

/// Message body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Body {
    #[default]
    Empty,
    Text(String),
    Resource(ResourceValue),
    Sequence { kind: Kind, items: Vec<ResourceValue> },
}

impl Body {
    pub fn resource<R: Resource>(resource: R) -> Self {
        Body::Resource(resource.into_value())
    }

    pub fn sequence<R: Resource>(resources: Vec<R>) -> Self {
        Body::Sequence {
            kind: R::KIND,
            items: resources.into_iter().map(Resource::into_value).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short description of the body's shape, for diagnostics
    pub fn describe(&self) -> String {
        match self {
            Body::Empty => "empty body".to_string(),
            Body::Text(_) => "text".to_string(),
            Body::Resource(value) => value.kind().to_string(),
            Body::Sequence { kind, .. } => format!("list of {}", kind),
        }
    }
}

/// Abstract view of an incoming message
pub trait MessageAdapter: Send + Sync {
    /// Raw header value, `None` when the header is absent
    fn header(&self, name: Header) -> Option<&HeaderValue>;

    fn body(&self) -> &Body;

    fn set_body(&mut self, body: Body);

    fn set_fault(&mut self, fault: bool);
}

/// Typed access on top of [`MessageAdapter`]
pub trait MessageExt: MessageAdapter {
    /// Typed header retrieval. Absent and null headers yield `Ok(None)`.
    fn header_as<T: FromHeader>(&self, name: Header) -> Result<Option<T>> {
        match self.header(name) {
            None | Some(HeaderValue::Null) => Ok(None),
            Some(value) => T::from_header(value).map(Some).ok_or(Error::HeaderType {
                header: name,
                expected: T::TYPE_NAME,
            }),
        }
    }

    /// The body as a resource of kind `R`, if it is one
    fn typed_body<R: Resource>(&self) -> Option<R> {
        match self.body() {
            Body::Resource(value) => R::from_value(value).cloned(),
            _ => None,
        }
    }

    /// The body as a resource of kind `R`; anything else is an error
    fn body_as<R: Resource>(&self) -> Result<R> {
        self.typed_body().ok_or_else(|| Error::BodyType {
            expected: R::KIND,
            found: self.body().describe(),
        })
    }

    /// The body as a non-empty string
    fn body_text(&self) -> Option<&str> {
        self.body().as_text().filter(|s| !s.is_empty())
    }
}

impl<M: MessageAdapter + ?Sized> MessageExt for M {}

/// In-process message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    headers: HashMap<String, HeaderValue>,
    #[serde(default)]
    body: Body,
    #[serde(default)]
    fault: bool,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: Header, value: impl Into<HeaderValue>) -> Self {
        self.set_header(name, value);
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn set_header(&mut self, name: Header, value: impl Into<HeaderValue>) {
        self.headers.insert(name.as_str().to_string(), value.into());
    }

    /// Set a header outside the producer vocabulary
    pub fn set_raw_header(&mut self, name: impl Into<String>, value: impl Into<HeaderValue>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn headers(&self) -> &HashMap<String, HeaderValue> {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn is_fault(&self) -> bool {
        self.fault
    }

    pub fn into_body(self) -> Body {
        self.body
    }
}

impl MessageAdapter for Message {
    fn header(&self, name: Header) -> Option<&HeaderValue> {
        self.headers.get(name.as_str())
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn set_body(&mut self, body: Body) {
        self.body = body;
    }

    fn set_fault(&mut self, fault: bool) {
        self.fault = fault;
    }
}

//! Request envelopes

use crate::case::CasingPolicy;
use crate::config::{StaticConfigProvider, WireConfig, WireConfigProvider};
use crate::error::{WireError, WireResult};
use crate::header::{CONTENT_TYPE, X_AMZ_TARGET};
use crate::http::OrderedHeaders;
use crate::operation::Operation;
use crate::options::RawOptions;
use crate::param::Param;
use crate::transform::{check_wire_keys, transform_map};

use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;
use tracing::debug;

/// A fully built request, ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Always `POST`
    pub http_method: ::http::Method,
    /// Routing header first, then content type
    pub headers: OrderedHeaders,
    /// Always `/`
    pub path: String,
    /// The wire-format body
    pub data: Value,
    /// Routing identifier for the transport layer
    pub service: String,
    pub operation: Operation,
}

impl Request {
    /// Serializes [`data`](Self::data) into the request body.
    ///
    /// # Errors
    /// Returns [`WireError::Json`] if serialization fails.
    pub fn body_bytes(&self) -> WireResult<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(&self.data)?))
    }
}

/// Builds the headers of `operation`.
///
/// ```
/// # use codedeploy_wire::{build_headers, Operation, WireConfig};
/// let headers = build_headers(&WireConfig::default(), Operation::CreateApplication);
/// assert_eq!(headers.get_unique("x-amz-target"), Some("CodeDeploy_20141006.CreateApplication"));
/// assert_eq!(headers.get_unique("content-type"), Some("application/x-amz-json-1.1"));
/// ```
#[must_use]
pub fn build_headers(config: &WireConfig, operation: Operation) -> OrderedHeaders {
    let mut headers = OrderedHeaders::new();
    headers.push(X_AMZ_TARGET, format!("{}.{}", config.target_prefix(), operation.name()));
    headers.push(CONTENT_TYPE, config.content_type.clone());
    headers
}

/// Builds a request from caller options.
///
/// # Errors
/// + [`WireError::DepthExceeded`] if `opts` nest deeper than [`WireConfig::max_depth`]
/// + [`WireError::DuplicateKey`] if two keys of one map render to the same wire key
pub fn build_request(
    config: &WireConfig,
    operation: Operation,
    opts: impl Into<RawOptions>,
    policy: CasingPolicy,
) -> WireResult<Request> {
    let params = opts.into().normalize();

    let depth = 1 + params.values().map(Param::depth).max().unwrap_or(0);
    if depth > config.max_depth {
        return Err(WireError::DepthExceeded { max: config.max_depth });
    }
    check_wire_keys(&params, policy, &config.rules)?;

    let data = transform_map(&params, policy, &config.rules);
    debug!(operation = operation.name(), keys = data.len(), depth, "built request");

    Ok(Request {
        http_method: ::http::Method::POST,
        headers: build_headers(config, operation),
        path: "/".to_owned(),
        data: Value::Object(data),
        service: config.service.clone(),
        operation,
    })
}

/// Builds requests against a configuration provider.
///
/// Each request takes one configuration snapshot, so a concurrent
/// [`HotReloadConfigProvider::update`](crate::config::HotReloadConfigProvider::update)
/// never mixes two configurations into one request.
#[derive(Clone)]
pub struct RequestFactory {
    config: Arc<dyn WireConfigProvider>,
}

impl RequestFactory {
    #[must_use]
    pub fn new(config: Arc<dyn WireConfigProvider>) -> Self {
        Self { config }
    }

    /// Builds a camelCase request.
    ///
    /// # Errors
    /// See [`build_request`].
    pub fn request(&self, operation: Operation, opts: impl Into<RawOptions>) -> WireResult<Request> {
        self.request_with_policy(operation, opts, CasingPolicy::LowerInitial)
    }

    /// Builds a request whose top-level keys follow `policy`.
    ///
    /// # Errors
    /// See [`build_request`].
    pub fn request_with_policy(
        &self,
        operation: Operation,
        opts: impl Into<RawOptions>,
        policy: CasingPolicy,
    ) -> WireResult<Request> {
        let config = self.config.snapshot();
        build_request(&config, operation, opts, policy)
    }

    /// Builds a request for an operation given by name.
    ///
    /// # Errors
    /// Returns [`WireError::UnknownOperation`] for an unknown name, otherwise see [`build_request`].
    pub fn request_by_name(&self, name: &str, opts: impl Into<RawOptions>) -> WireResult<Request> {
        self.request(Operation::from_name(name)?, opts)
    }
}

impl Default for RequestFactory {
    fn default() -> Self {
        Self::new(Arc::new(StaticConfigProvider::default()))
    }
}

impl std::fmt::Debug for RequestFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestFactory").finish_non_exhaustive()
    }
}

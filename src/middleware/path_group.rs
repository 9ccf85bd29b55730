//! Path group middleware.
//!
//! Computes the normalized path template for every inbound request and
//! exposes it three ways: as a request header for downstream services, as
//! a request extension for handlers, and as a response header for clients
//! and debugging. Normalization is CPU-only and synchronous, so the
//! middleware never suspends before calling the wrapped service.

use crate::{
    config::PathGroupConfig,
    services::normalizer::{OutputMode, PathNormalizer},
};
use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{HeaderName, HeaderValue, InvalidHeaderName},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
};

/// Errors surfaced while constructing the path group middleware
#[derive(Debug, thiserror::Error)]
pub enum PathGroupError {
    #[error("invalid path group header name {name:?}: {source}")]
    InvalidHeaderName {
        name: String,
        source: InvalidHeaderName,
    },
}

/// The computed path group for the current request, stored in request
/// extensions by [`PathGroupMiddleware`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathGroup(pub String);

impl PathGroup {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Path group middleware factory
pub struct PathGroupMiddleware {
    header: HeaderName,
    normalizer: PathNormalizer,
}

impl PathGroupMiddleware {
    /// Create the middleware from a configuration, validating the header name
    pub fn new(config: &PathGroupConfig) -> Result<Self, PathGroupError> {
        let header = HeaderName::from_bytes(config.header_name.as_bytes()).map_err(|source| {
            PathGroupError::InvalidHeaderName {
                name: config.header_name.clone(),
                source,
            }
        })?;

        Ok(Self {
            header,
            normalizer: PathNormalizer::new(config.output_mode),
        })
    }

    /// Create the middleware from environment configuration
    pub fn from_env() -> Result<Self, PathGroupError> {
        Self::new(&PathGroupConfig::from_env())
    }
}

impl Default for PathGroupMiddleware {
    fn default() -> Self {
        Self {
            header: HeaderName::from_static(crate::config::DEFAULT_HEADER_NAME),
            normalizer: PathNormalizer::new(OutputMode::Named),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for PathGroupMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = PathGroupService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PathGroupService {
            service,
            header: self.header.clone(),
            normalizer: self.normalizer,
        }))
    }
}

/// The actual path group middleware service
pub struct PathGroupService<S> {
    service: S,
    header: HeaderName,
    normalizer: PathNormalizer,
}

impl<S, B> Service<ServiceRequest> for PathGroupService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let path_group = self.normalizer.normalize(req.path());

        tracing::debug!(
            target: "path_group",
            path = %req.path(),
            path_group = %path_group,
            "Computed path group"
        );

        // Request paths are not guaranteed to be valid header values; fall
        // back to the root group rather than failing the request.
        let header_value = HeaderValue::from_str(&path_group)
            .unwrap_or_else(|_| HeaderValue::from_static("/"));

        // Make the group visible to downstream services via the request
        // header and to handlers via request extensions.
        req.headers_mut()
            .insert(self.header.clone(), header_value.clone());
        req.extensions_mut().insert(PathGroup(path_group));

        let header = self.header.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            res.headers_mut().insert(header, header_value);
            Ok(res)
        })
    }
}

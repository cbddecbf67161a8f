//! Hit counting middleware for the static app

use std::{
    future::{ready, Ready},
    sync::Arc,
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};

use crate::metrics::ServerMetrics;

/// Middleware factory that counts every request passing through it
pub struct CountFileServerHits {
    metrics: Arc<ServerMetrics>,
}

impl CountFileServerHits {
    pub fn new(metrics: Arc<ServerMetrics>) -> Self {
        Self { metrics }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CountFileServerHits
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CountFileServerHitsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CountFileServerHitsMiddleware {
            service,
            metrics: self.metrics.clone(),
        }))
    }
}

/// Hit counting middleware service
pub struct CountFileServerHitsMiddleware<S> {
    service: S,
    metrics: Arc<ServerMetrics>,
}

impl<S, B> Service<ServiceRequest> for CountFileServerHitsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(
        &self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Counted before the handler runs, whatever it answers
        self.metrics.record_file_server_hit();
        self.service.call(req)
    }
}

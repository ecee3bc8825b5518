//! Administrative access guard.
//!
//! Administrative endpoints require the `X-Admin-Key` header to match the
//! configured key. When no key is configured every request is refused.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use gym_core::errors::{AuthError, DomainError};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::domain_error_body;

/// Header carrying the administrative key
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Admin guard middleware factory
#[derive(Clone)]
pub struct AdminGuard {
    admin_key: Option<Arc<str>>,
}

impl AdminGuard {
    /// Creates a guard accepting `admin_key`; `None` locks the endpoints
    pub fn new(admin_key: Option<String>) -> Self {
        Self {
            admin_key: admin_key
                .filter(|key| !key.trim().is_empty())
                .map(Arc::from),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGuardMiddleware {
            service: Rc::new(service),
            admin_key: self.admin_key.clone(),
        }))
    }
}

/// Admin guard middleware service
pub struct AdminGuardMiddleware<S> {
    service: Rc<S>,
    admin_key: Option<Arc<str>>,
}

impl<S, B> Service<ServiceRequest> for AdminGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let presented = req
            .headers()
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let allowed = is_authorized(self.admin_key.as_deref(), presented.as_deref());

        Box::pin(async move {
            if !allowed {
                log::warn!(
                    "Rejected administrative request to {} {}",
                    req.method(),
                    req.path()
                );
                let error: DomainError = AuthError::AdminAccessRequired.into();
                let (status, body) = domain_error_body(&error);
                let response = HttpResponse::build(status).json(body);
                return Ok(req.into_response(response).map_into_right_body());
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Compares keys without stopping at the first differing byte
fn is_authorized(expected: Option<&str>, presented: Option<&str>) -> bool {
    match (expected, presented) {
        (Some(expected), Some(presented)) => {
            let (a, b) = (expected.as_bytes(), presented.as_bytes());
            a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
        }
        _ => false,
    }
}

//! Bearer-token authorization gate for protected routes.
//!
//! Each request walks a fixed sequence; the first failing step ends it with
//! `401 Unauthorized`:
//!
//! 1. header check: an `Authorization` header must be present;
//! 2. token extraction: the value must be `Bearer <token>`;
//! 3. token decode: the token must decode to a credential;
//! 4. credential verification: [`AccountService::check_user`] must succeed.
//!
//! Steps 2 and 3 are answered exactly like step 4 rather than escaping as a
//! server fault. On success the request continues with an
//! [`AuthenticatedSubject`] in its extensions. Only step 4 failures are
//! logged against the attempted email; tokens and passwords never reach the
//! logs.

use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{HttpMessage, ResponseError};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, warn};

use crate::domain::ports::AccountService;
use crate::domain::{self, AuthError, TokenCodec};

/// Identity established by the gate, readable by handlers through
/// `web::ReqData<AuthenticatedSubject>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSubject {
    email: String,
}

impl AuthenticatedSubject {
    /// Email of the verified account.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// `Authorization` header as presented by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PresentedHeader {
    Missing,
    Unreadable,
    Value(String),
}

impl PresentedHeader {
    fn from_request(req: &ServiceRequest) -> Self {
        match req.headers().get(AUTHORIZATION) {
            None => Self::Missing,
            Some(value) => value
                .to_str()
                .map_or(Self::Unreadable, |raw| Self::Value(raw.to_owned())),
        }
    }
}

/// Why the gate refused a request.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GateRejection {
    MissingHeader,
    Format(AuthError),
    Verification { email: String, error: AuthError },
}

impl GateRejection {
    fn log(&self) {
        match self {
            Self::MissingHeader => debug!("authorization header missing"),
            Self::Format(error) => debug!(reason = error.kind(), "rejected malformed bearer token"),
            Self::Verification { email, error } => warn!(
                email = %email,
                reason = error.kind(),
                %error,
                "Error while trying to authenticate user"
            ),
        }
    }

    fn client_message(&self) -> &'static str {
        match self {
            Self::MissingHeader => "authorization header required",
            Self::Format(_) => "malformed bearer token",
            Self::Verification { .. } => "invalid credentials",
        }
    }
}

/// Middleware factory gating a scope behind bearer credentials.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use auth_gate::domain::{AuthenticationService, TokenCodec};
/// use auth_gate::middleware::RequireBearer;
/// use auth_gate::outbound::persistence::InMemoryAccountRepository;
///
/// let accounts = Arc::new(AuthenticationService::new(Arc::new(
///     InMemoryAccountRepository::new(),
/// )));
/// let gate = RequireBearer::new(Arc::new(TokenCodec::default()), accounts);
/// let _app = App::new().service(web::scope("/protected").wrap(gate));
/// ```
#[derive(Clone)]
pub struct RequireBearer {
    codec: Arc<TokenCodec>,
    accounts: Arc<dyn AccountService>,
}

impl RequireBearer {
    /// Build a gate from the shared codec and account service.
    pub fn new(codec: Arc<TokenCodec>, accounts: Arc<dyn AccountService>) -> Self {
        Self { codec, accounts }
    }

    async fn authorize(
        &self,
        presented: PresentedHeader,
    ) -> Result<AuthenticatedSubject, GateRejection> {
        let header = match presented {
            PresentedHeader::Missing => return Err(GateRejection::MissingHeader),
            PresentedHeader::Unreadable => {
                return Err(GateRejection::Format(AuthError::MalformedHeader));
            }
            PresentedHeader::Value(header) => header,
        };

        let token = self
            .codec
            .extract_from_header(&header)
            .map_err(|err| GateRejection::Format(err.into()))?;
        let credential = self
            .codec
            .decode(&token)
            .map_err(|err| GateRejection::Format(err.into()))?;

        match self.accounts.check_user(&credential).await {
            Ok(()) => Ok(AuthenticatedSubject {
                email: credential.email().to_owned(),
            }),
            Err(error) => Err(GateRejection::Verification {
                email: credential.email().to_owned(),
                error,
            }),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireBearer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequireBearerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireBearerMiddleware {
            service: Rc::new(service),
            gate: self.clone(),
        }))
    }
}

/// Service produced by [`RequireBearer`].
pub struct RequireBearerMiddleware<S> {
    service: Rc<S>,
    gate: RequireBearer,
}

impl<S, B> Service<ServiceRequest> for RequireBearerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = self.gate.clone();
        let presented = PresentedHeader::from_request(&req);

        Box::pin(async move {
            match gate.authorize(presented).await {
                Ok(subject) => {
                    req.extensions_mut().insert(subject);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(rejection) => {
                    rejection.log();
                    let response =
                        domain::Error::unauthorized(rejection.client_message()).error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

//! # Ingress Module - HTTP Entry Point
//!
//! `HttpIngress` wires request paths to handlers; it is a routing table plus
//! a hyper accept loop, not a framework.
//!
//! ## API Surface
//!
//! - `bind(addr)`: listen address
//! - `route(path, handler)`: exact `GET` route
//! - `route_method(method, path, handler)`: exact route for any method
//! - `prefix(method, prefix, handler)`: subtree route, longest prefix wins
//! - `fallback(handler)`: everything else
//! - `into_router()` / `into_raw_service()`: dispatch without a socket

use crate::response::{self, HttpResponse};
use bytes::Bytes;
use http::{Method, Request, Response};
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::Service;
use tracing::Instrument;

/// Default listen address when `bind` is never called.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

type BoxResponseFuture = Pin<Box<dyn Future<Output = HttpResponse> + Send>>;

/// Route handler type: boxed async function returning Response
type RouteHandler<R> = Arc<dyn Fn(Request<()>, Arc<R>) -> BoxResponseFuture + Send + Sync>;

#[derive(Debug, Error)]
pub enum IngressError {
    #[error("invalid bind address `{addr}`: {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("listener error: {0}")]
    Io(#[from] std::io::Error),
}

fn boxed<R, F, Fut>(handler: F) -> RouteHandler<R>
where
    R: Send + Sync + 'static,
    F: Fn(Request<()>, Arc<R>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HttpResponse> + Send + 'static,
{
    Arc::new(move |req, res| Box::pin(handler(req, res)) as BoxResponseFuture)
}

/// HTTP Ingress builder.
pub struct HttpIngress<R> {
    /// Bind address (e.g., "127.0.0.1:3000")
    addr: Option<String>,
    /// Routes: (Method, Path) -> Handler
    routes: HashMap<(Method, String), RouteHandler<R>>,
    /// Prefix routes: (Method, Prefix, Handler)
    prefixes: Vec<(Method, String, RouteHandler<R>)>,
    /// Fallback for unmatched routes
    fallback: Option<RouteHandler<R>>,
}

impl<R> HttpIngress<R>
where
    R: Send + Sync + 'static,
{
    /// Create a new empty HttpIngress builder.
    pub fn new() -> Self {
        Self {
            addr: None,
            routes: HashMap::new(),
            prefixes: Vec::new(),
            fallback: None,
        }
    }

    /// Set the bind address for the server.
    pub fn bind(mut self, addr: impl Into<String>) -> Self {
        self.addr = Some(addr.into());
        self
    }

    /// Register a `GET` route.
    pub fn route<F, Fut>(self, path: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Request<()>, Arc<R>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResponse> + Send + 'static,
    {
        self.route_method(Method::GET, path, handler)
    }

    /// Register a route with a specific HTTP method.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// HttpIngress::new()
    ///     .route_method(Method::POST, "/subscribe", subscribe)
    /// ```
    pub fn route_method<F, Fut>(
        mut self,
        method: Method,
        path: impl Into<String>,
        handler: F,
    ) -> Self
    where
        F: Fn(Request<()>, Arc<R>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResponse> + Send + 'static,
    {
        self.routes.insert((method, path.into()), boxed(handler));
        self
    }

    /// Register a handler for every path under `prefix`.
    pub fn prefix<F, Fut>(mut self, method: Method, prefix: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Request<()>, Arc<R>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResponse> + Send + 'static,
    {
        self.prefixes.push((method, prefix.into(), boxed(handler)));
        self
    }

    /// Set a fallback for unmatched routes. Its response is sent as-is.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// HttpIngress::new()
    ///     .route("/", home)
    ///     .fallback(|_req, _state| async { response::not_found() })
    /// ```
    pub fn fallback<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(Request<()>, Arc<R>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResponse> + Send + 'static,
    {
        self.fallback = Some(boxed(handler));
        self
    }

    /// Freeze the routing table.
    pub fn into_router(self) -> (Option<String>, Router<R>) {
        let router = Router {
            routes: self.routes,
            prefixes: self.prefixes,
            fallback: self.fallback,
        };
        (self.addr, router)
    }

    /// Run the HTTP server until the process is stopped.
    pub async fn run(self, resources: R) -> Result<(), IngressError> {
        self.run_until(resources, std::future::pending()).await
    }

    /// Run the HTTP server until `shutdown` resolves. In-flight connections
    /// finish on their own tasks.
    pub async fn run_until(
        self,
        resources: R,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), IngressError> {
        let (addr, router) = self.into_router();
        let addr_str = addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|source| IngressError::InvalidAddr {
                addr: addr_str.clone(),
                source,
            })?;

        let router = Arc::new(router);
        let resources = Arc::new(resources);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Starsite HTTP Ingress listening on http://{}", addr);

        tokio::pin!(shutdown);
        loop {
            let (stream, peer) = tokio::select! {
                accepted = listener.accept() => accepted?,
                _ = &mut shutdown => {
                    tracing::info!("Shutdown signal received, no longer accepting connections");
                    return Ok(());
                }
            };
            let io = TokioIo::new(stream);

            let router = router.clone();
            let resources = resources.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let router = router.clone();
                    let resources = resources.clone();

                    async move {
                        let (parts, _body) = req.into_parts();
                        let req = Request::from_parts(parts, ());
                        Ok::<_, Infallible>(router.dispatch(req, resources).await)
                    }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    tracing::error!(%peer, "Error serving connection: {:?}", err);
                }
            });
        }
    }

    /// Convert to a raw Tower Service for integration with existing Tower stacks.
    pub fn into_raw_service(self, resources: R) -> RawIngressService<R> {
        let (_, router) = self.into_router();
        RawIngressService {
            router: Arc::new(router),
            resources: Arc::new(resources),
        }
    }
}

impl<R> Default for HttpIngress<R>
where
    R: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable routing table, shared by every connection task.
pub struct Router<R> {
    routes: HashMap<(Method, String), RouteHandler<R>>,
    prefixes: Vec<(Method, String, RouteHandler<R>)>,
    fallback: Option<RouteHandler<R>>,
}

impl<R> Router<R>
where
    R: Send + Sync + 'static,
{
    fn find(&self, method: &Method, path: &str) -> Option<&RouteHandler<R>> {
        if let Some(handler) = self.routes.get(&(method.clone(), path.to_string())) {
            return Some(handler);
        }

        self.prefixes
            .iter()
            .filter(|(m, prefix, _)| m == method && path.starts_with(prefix.as_str()))
            .max_by_key(|(_, prefix, _)| prefix.len())
            .map(|(_, _, handler)| handler)
    }

    /// Route one request. `HEAD` is answered by the `GET` handler with the
    /// body dropped.
    pub async fn dispatch(&self, req: Request<()>, resources: Arc<R>) -> HttpResponse {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "HTTPRequest",
            starsite.http.method = %method,
            starsite.http.path = %path,
            starsite.http.request_id = %request_id
        );

        async move {
            let head_only = method == Method::HEAD;
            let lookup = if head_only { Method::GET } else { method };

            let res = if let Some(handler) = self.find(&lookup, &path) {
                handler(req, resources).await
            } else if let Some(fallback) = &self.fallback {
                fallback(req, resources).await
            } else {
                response::not_found()
            };

            tracing::debug!(status = %res.status(), "Request completed");
            if head_only { strip_body(res) } else { res }
        }
        .instrument(span)
        .await
    }
}

fn strip_body(res: HttpResponse) -> HttpResponse {
    let (parts, _) = res.into_parts();
    Response::from_parts(parts, Full::new(Bytes::new()))
}

/// Internal service type for `into_raw_service()`
pub struct RawIngressService<R> {
    router: Arc<Router<R>>,
    resources: Arc<R>,
}

impl<R> Clone for RawIngressService<R> {
    fn clone(&self) -> Self {
        Self {
            router: self.router.clone(),
            resources: self.resources.clone(),
        }
    }
}

impl<B, R> Service<Request<B>> for RawIngressService<R>
where
    B: Send + 'static,
    R: Send + Sync + 'static,
{
    type Response = HttpResponse;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let router = self.router.clone();
        let resources = self.resources.clone();

        Box::pin(async move {
            let (parts, _body) = req.into_parts();
            let req = Request::from_parts(parts, ());
            Ok(router.dispatch(req, resources).await)
        })
    }
}

/// An empty request, mostly for tests and health probes.
pub fn empty_request(method: Method, path: &str) -> Request<()> {
    let mut req = Request::new(());
    *req.method_mut() = method;
    if let Ok(uri) = path.parse() {
        *req.uri_mut() = uri;
    }
    req
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct Greeting(&'static str);

    fn ingress() -> HttpIngress<Greeting> {
        HttpIngress::new()
            .route("/", |_req, state: Arc<Greeting>| async move {
                response::html(state.0)
            })
            .prefix(Method::GET, "/static/", |req: Request<()>, _| async move {
                response::text(format!("static:{}", req.uri().path()))
            })
            .prefix(Method::GET, "/static/img/", |_, _| async {
                response::text("image")
            })
    }

    async fn body_string(res: HttpResponse) -> String {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_exact_route() {
        let (_, router) = ingress().into_router();
        let res = router
            .dispatch(empty_request(Method::GET, "/"), Arc::new(Greeting("hello")))
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_string(res).await, "hello");
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let (_, router) = ingress().into_router();
        let state = Arc::new(Greeting(""));

        let res = router
            .dispatch(empty_request(Method::GET, "/static/app.js"), state.clone())
            .await;
        assert_eq!(body_string(res).await, "static:/static/app.js");

        let res = router
            .dispatch(empty_request(Method::GET, "/static/img/bg.jpg"), state)
            .await;
        assert_eq!(body_string(res).await, "image");
    }

    #[tokio::test]
    async fn test_unmatched_is_404_without_fallback() {
        let (_, router) = ingress().into_router();
        let res = router
            .dispatch(empty_request(Method::GET, "/nope"), Arc::new(Greeting("")))
            .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_fallback_and_method_mismatch() {
        let (_, router) = ingress()
            .fallback(|_, _| async { response::text("fallback") })
            .into_router();
        let res = router
            .dispatch(empty_request(Method::POST, "/"), Arc::new(Greeting("")))
            .await;
        assert_eq!(body_string(res).await, "fallback");
    }

    #[tokio::test]
    async fn test_head_uses_get_route_without_body() {
        let (_, router) = ingress().into_router();
        let res = router
            .dispatch(empty_request(Method::HEAD, "/"), Arc::new(Greeting("hello")))
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(http::header::CONTENT_TYPE));
        assert_eq!(body_string(res).await, "");
    }

    #[tokio::test]
    async fn test_raw_service() {
        let service = ingress().into_raw_service(Greeting("raw"));
        let req = Request::get("/").body(Bytes::new()).unwrap();
        let res = service.oneshot(req).await.unwrap();
        assert_eq!(body_string(res).await, "raw");
    }
}

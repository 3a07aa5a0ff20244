use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use hbnb_client::{ApiRequest, ApiResponse, Method, Transport, TransportError};

struct Route {
    method: Method,
    url: String,
    response: Result<ApiResponse, TransportError>,
    delay: usize,
}

/// Scripted backend. Unknown routes answer 404; every request is recorded.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<Vec<Route>>,
    requests: RefCell<Vec<ApiRequest>>,
    completed: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: Method, url: &str, response: ApiResponse) -> Self {
        self.route(method, url, Ok(response), 0)
    }

    pub fn on_json(self, method: Method, url: &str, status: u16, body: &str) -> Self {
        self.on(method, url, ApiResponse::json(status, body))
    }

    /// Like `on_json`, but the response only arrives after `polls` yields.
    pub fn on_json_delayed(
        self,
        method: Method,
        url: &str,
        status: u16,
        body: &str,
        polls: usize,
    ) -> Self {
        self.route(method, url, Ok(ApiResponse::json(status, body)), polls)
    }

    pub fn unreachable(self, method: Method, url: &str) -> Self {
        self.route(
            method,
            url,
            Err(TransportError("connection refused".to_string())),
            0,
        )
    }

    /// Replaces the response of an existing route.
    pub fn respond(&self, method: Method, url: &str, response: ApiResponse) {
        let mut routes = self.routes.borrow_mut();
        routes.retain(|route| !(route.method == method && route.url == url));
        routes.push(Route {
            method,
            url: url.to_string(),
            response: Ok(response),
            delay: 0,
        });
    }

    fn route(
        self,
        method: Method,
        url: &str,
        response: Result<ApiResponse, TransportError>,
        delay: usize,
    ) -> Self {
        self.routes.borrow_mut().push(Route {
            method,
            url: url.to_string(),
            response,
            delay,
        });
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: Method, url: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|request| request.method == method && request.url == url)
            .count()
    }

    /// URLs in the order their responses were delivered.
    pub fn completed(&self) -> Vec<String> {
        self.completed.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        let (response, delay) = self
            .routes
            .borrow()
            .iter()
            .rev()
            .find(|route| route.method == request.method && route.url == request.url)
            .map(|route| (route.response.clone(), route.delay))
            .unwrap_or_else(|| (Ok(ApiResponse::json(404, r#"{"error": "Not found"}"#)), 0));
        YieldNow(delay).await;
        self.completed.borrow_mut().push(request.url);
        response
    }
}

/// Returns `Pending` a fixed number of times before completing.
struct YieldNow(usize);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            return Poll::Ready(());
        }
        self.0 -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

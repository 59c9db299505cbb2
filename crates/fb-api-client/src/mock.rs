//! In-process transport that answers from canned routes and records every
//! request it sees.

use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::cell::RefCell;

enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

struct Route {
    method: Method,
    target: String,
    reply: Reply,
}

/// Routes match on method and on the request target (path plus query,
/// without the base URL) starting with the registered prefix. The most
/// recently registered match wins, so tests can override earlier routes.
#[derive(Default)]
pub struct MockTransport {
    base: String,
    routes: RefCell<Vec<Route>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    /// `base` is the API base the client under test is configured with.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
    }

    pub fn respond(&self, method: Method, target: &str, status: u16, body: &str) -> &Self {
        self.routes.borrow_mut().push(Route {
            method,
            target: target.to_owned(),
            reply: Reply::Respond(HttpResponse::new(status, body)),
        });
        self
    }

    pub fn fail(&self, method: Method, target: &str, reason: &str) -> &Self {
        self.routes.borrow_mut().push(Route {
            method,
            target: target.to_owned(),
            reply: Reply::Fail(reason.to_owned()),
        });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Number of recorded requests whose target starts with `target`.
    pub fn count(&self, method: Method, target: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|req| req.method == method && self.target_of(&req.url).starts_with(target))
            .count()
    }

    fn target_of<'a>(&self, url: &'a str) -> &'a str {
        url.strip_prefix(self.base.as_str()).unwrap_or(url)
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());

        let target = self.target_of(&request.url);
        let routes = self.routes.borrow();
        let route = routes
            .iter()
            .rev()
            .find(|route| route.method == request.method && target.starts_with(&route.target))
            .ok_or_else(|| anyhow!("no mock route for {} {}", request.method, target))?;

        match &route.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail(reason) => Err(anyhow!("{reason}")),
        }
    }
}

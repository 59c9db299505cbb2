//! Browser HTTP transport.
//!
//! Implements the client's `Transport` seam on top of `fetch` via gloo-net.
//! The backend is chosen from the page's hostname.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use fb_api_client::{ClientConfig, HttpRequest, HttpResponse, Method, Transport};
use gloo_net::http::Request;

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|err| anyhow!("{} {}: {}", request.method, request.url, err))?;

        let response = prepared
            .send()
            .await
            .map_err(|err| anyhow!("{} {} fetch error: {}", request.method, request.url, err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| anyhow!("{} {} body: {}", request.method, request.url, err))?;

        Ok(HttpResponse { status, body })
    }
}

pub fn config_for_location() -> ClientConfig {
    let host = gloo_utils::window()
        .location()
        .hostname()
        .unwrap_or_default();
    ClientConfig::for_hostname(&host)
}

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use fb_api_types::{
    AuthResponse, CreateOrderRequest, CreateOrderResponse, ErrorBody, Language, LoginRequest,
    MovieId, OrderRecord, OrdersResponse, PopularPage, RawMovie, RegisterRequest,
};
use fb_session::{SessionStorage, SessionStore};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    /// Public catalog and credential exchange; never carries a stored token
    /// and never clears the session.
    Anonymous,
    /// Carries the stored token when there is one. 401/403 clears the session.
    Bearer,
}

pub struct ApiClient<T, S> {
    transport: T,
    config: ClientConfig,
    session: SessionStore<S>,
}

impl<T, S> ApiClient<T, S>
where
    T: Transport,
    S: SessionStorage,
{
    pub fn new(transport: T, config: ClientConfig, session: SessionStore<S>) -> Self {
        Self {
            transport,
            config,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET /api/movies/popular
    pub async fn list_popular(&self, page: u32, language: Language) -> Result<Vec<RawMovie>, ApiError> {
        let path = format!(
            "/api/movies/popular?language={}&page={}",
            language.code(),
            page
        );
        let body: PopularPage = self
            .execute(Method::Get, &path, None, Auth::Anonymous)
            .await?;
        Ok(body.results)
    }

    /// GET /api/movies/{id}
    pub async fn get_detail(&self, id: &MovieId, language: Language) -> Result<RawMovie, ApiError> {
        let path = format!("/api/movies/{}?language={}", id, language.code());
        self.execute(Method::Get, &path, None, Auth::Anonymous).await
    }

    /// POST /api/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let body = encode(request)?;
        self.execute(Method::Post, "/api/register", Some(body), Auth::Anonymous)
            .await
    }

    /// POST /api/login
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let body = encode(request)?;
        self.execute(Method::Post, "/api/login", Some(body), Auth::Anonymous)
            .await
    }

    /// POST /api/orders. Returns the backend order id when it sends one.
    pub async fn create_order(&self, order: &CreateOrderRequest) -> Result<Option<String>, ApiError> {
        let body = encode(order)?;
        let response: CreateOrderResponse = self
            .execute(Method::Post, "/api/orders", Some(body), Auth::Bearer)
            .await?;
        Ok(response.order_id())
    }

    /// GET /api/orders
    pub async fn list_orders(&self) -> Result<Vec<OrderRecord>, ApiError> {
        let body: OrdersResponse = self
            .execute(Method::Get, "/api/orders", None, Auth::Bearer)
            .await?;
        Ok(body.orders)
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        auth: Auth,
    ) -> Result<R, ApiError> {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if auth == Auth::Bearer {
            if let Some(token) = self.session.get_token() {
                headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
        }

        let request = HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        };
        debug!("{} {}", method, request.url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|err| ApiError::Transport(format!("{err:#}")))?;

        if response.is_success() {
            return serde_json::from_str(&response.body).map_err(|err| {
                warn!("{} {} returned an unreadable body: {}", method, path, err);
                ApiError::Decode(err.to_string())
            });
        }

        Err(self.failure(method, path, auth, &response))
    }

    fn failure(&self, method: Method, path: &str, auth: Auth, response: &HttpResponse) -> ApiError {
        let status = response.status;
        if auth == Auth::Bearer && matches!(status, 401 | 403) {
            warn!("{} {} rejected with {}, clearing session", method, path, status);
            self.session.clear();
            return ApiError::Unauthorized { status };
        }

        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.error)
            .filter(|msg| !msg.trim().is_empty());
        debug!("{} {} failed with {}: {:?}", method, path, status, message);
        ApiError::Rejected { status, message }
    }
}

fn encode<B: serde::Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))
}

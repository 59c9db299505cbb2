use crate::context::Storefront;
use crate::messages;
use fb_api_client::{ApiError, Transport};
use fb_api_types::{CreateOrderRequest, MovieId};
use fb_catalog::{MovieRecord, PurchaseFormat, UnknownFormat};
use fb_session::SessionStorage;
use tracing::{error, info, warn};

const DEFAULT_FILM_TITLE: &str = "film";
const ORDER_QUANTITY: u32 = 1;

/// Purchase form state on the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub film_title: String,
    pub film_id: Option<MovieId>,
    pub base_price: u32,
    pub format: PurchaseFormat,
}

impl OrderForm {
    pub fn for_movie(movie: &MovieRecord) -> Self {
        Self {
            film_title: movie.title.clone(),
            film_id: Some(movie.id.clone()),
            base_price: movie.price,
            format: PurchaseFormat::default(),
        }
    }

    pub fn select_format(&mut self, format: PurchaseFormat) {
        self.format = format;
    }

    /// Select by form value, leaving the current selection on unknown keys.
    pub fn select_format_key(&mut self, key: &str) -> Result<PurchaseFormat, UnknownFormat> {
        let format = key.parse()?;
        self.format = format;
        Ok(format)
    }

    pub fn total(&self) -> u32 {
        self.format.total(self.base_price)
    }

    pub fn format_label(&self) -> &'static str {
        self.format.label()
    }

    pub fn to_request(&self) -> CreateOrderRequest {
        let title = self.film_title.trim();
        let total = self.total();
        CreateOrderRequest {
            film_title: if title.is_empty() {
                DEFAULT_FILM_TITLE.to_owned()
            } else {
                title.to_owned()
            },
            film_id: self.film_id.clone(),
            format: self.format.key().to_owned(),
            quantity: ORDER_QUANTITY,
            price: total,
            total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Confirmed { email: String, order_id: Option<String> },
    /// No session; nothing was sent.
    AuthRequired,
    /// The backend refused the token and the session was cleared.
    SessionExpired,
    Rejected(String),
    ConnectionFailed,
}

impl OrderOutcome {
    pub fn message(&self) -> String {
        match self {
            OrderOutcome::Confirmed { email, .. } => messages::order_confirmed(email),
            OrderOutcome::AuthRequired => messages::ORDER_AUTH_REQUIRED.to_owned(),
            OrderOutcome::SessionExpired => messages::SESSION_EXPIRED.to_owned(),
            OrderOutcome::Rejected(msg) => msg.clone(),
            OrderOutcome::ConnectionFailed => messages::CONNECTION_FAILED.to_owned(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, OrderOutcome::Confirmed { .. })
    }
}

impl<T, S> Storefront<T, S>
where
    T: Transport,
    S: SessionStorage,
{
    pub async fn submit_order(&self, form: &OrderForm) -> OrderOutcome {
        let (Some(_), Some(user)) = (self.session.get_token(), self.session.get()) else {
            return OrderOutcome::AuthRequired;
        };

        let request = form.to_request();
        match self.client.create_order(&request).await {
            Ok(order_id) => {
                info!(
                    "order placed: {} ({}) total {}",
                    request.film_title, request.format, request.total
                );
                OrderOutcome::Confirmed {
                    email: user.email,
                    order_id,
                }
            }
            Err(ApiError::Unauthorized { .. }) => OrderOutcome::SessionExpired,
            Err(err) if err.is_connection_failure() => {
                error!("order request failed: {}", err);
                OrderOutcome::ConnectionFailed
            }
            Err(err) => {
                warn!("order rejected: {}", err);
                let message = err.backend_message().unwrap_or(messages::ORDER_FAILED);
                OrderOutcome::Rejected(message.to_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{signed_in, storefront};
    use fb_api_client::Method;

    fn form(base_price: u32) -> OrderForm {
        OrderForm {
            film_title: "Дюна".into(),
            film_id: Some(MovieId::from("dune")),
            base_price,
            format: PurchaseFormat::default(),
        }
    }

    #[test]
    fn totals_follow_selected_format() {
        let mut form = form(1000);
        assert_eq!(form.total(), 700);
        form.select_format(PurchaseFormat::DigitalAtmos);
        assert_eq!(form.total(), 1200);
        form.select_format_key("digital-4k").unwrap();
        assert_eq!(form.total(), 1000);
        assert_eq!(form.format_label(), "Цифровой 4K HDR");
    }

    #[test]
    fn unknown_format_key_keeps_selection() {
        let mut form = form(1000);
        assert!(form.select_format_key("vhs").is_err());
        assert_eq!(form.format, PurchaseFormat::DigitalHd);
    }

    #[test]
    fn request_carries_format_total() {
        let mut form = form(1290);
        form.select_format(PurchaseFormat::DigitalAtmos);
        let request = form.to_request();
        assert_eq!(request.film_title, "Дюна");
        assert_eq!(request.format, "digital-atmos");
        assert_eq!(request.quantity, 1);
        assert_eq!(request.price, 1548);
        assert_eq!(request.total, 1548);
    }

    #[test]
    fn blank_title_defaults() {
        let form = OrderForm {
            film_title: "  ".into(),
            film_id: None,
            ..form(990)
        };
        let request = form.to_request();
        assert_eq!(request.film_title, "film");
        assert_eq!(request.film_id, None);
    }

    #[tokio::test]
    async fn no_token_sends_nothing() {
        let shop = storefront();
        let outcome = shop.submit_order(&form(1000)).await;
        assert_eq!(outcome, OrderOutcome::AuthRequired);
        assert_eq!(outcome.message(), "Войдите в аккаунт для оформления заказа");
        assert_eq!(shop.client().transport().count(Method::Post, "/api/orders"), 0);
    }

    #[tokio::test]
    async fn confirmed_order_reports_email() {
        let shop = signed_in();
        shop.client()
            .transport()
            .respond(Method::Post, "/api/orders", 201, r#"{"order": {"id": 42}}"#);

        let outcome = shop.submit_order(&form(1000)).await;
        assert_eq!(
            outcome,
            OrderOutcome::Confirmed {
                email: "maria@example.com".into(),
                order_id: Some("42".into()),
            }
        );
        assert!(!outcome.is_error());

        let sent = &shop.client().transport().requests()[0];
        assert_eq!(sent.header("authorization"), Some("Bearer jwt-token"));
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["filmId"], "dune");
        assert_eq!(body["total"], 700);
    }

    #[tokio::test]
    async fn unauthorized_clears_session() {
        let shop = signed_in();
        shop.client()
            .transport()
            .respond(Method::Post, "/api/orders", 401, r#"{"error": "jwt expired"}"#);

        let outcome = shop.submit_order(&form(1000)).await;
        assert_eq!(outcome, OrderOutcome::SessionExpired);
        assert!(shop.session().get_token().is_none());
        assert!(shop.session().get().is_none());
    }

    #[tokio::test]
    async fn backend_error_is_verbatim() {
        let shop = signed_in();
        shop.client().transport().respond(
            Method::Post,
            "/api/orders",
            400,
            r#"{"error": "Фильм недоступен"}"#,
        );

        let outcome = shop.submit_order(&form(1000)).await;
        assert_eq!(outcome.message(), "Фильм недоступен");
        assert!(shop.session().is_authenticated());
    }

    #[tokio::test]
    async fn rejection_without_message_uses_default() {
        let shop = signed_in();
        shop.client()
            .transport()
            .respond(Method::Post, "/api/orders", 500, "oops");

        let outcome = shop.submit_order(&form(1000)).await;
        assert_eq!(outcome, OrderOutcome::Rejected("Ошибка создания заказа".into()));
    }
}

use crate::context::Storefront;
use crate::messages;
use fb_api_client::{ApiError, Transport};
use fb_api_types::OrderRecord;
use fb_catalog::PurchaseFormat;
use fb_session::SessionStorage;
use tracing::{debug, error, warn};

/// One line of the order history table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub product: String,
    pub format_label: String,
    pub quantity: String,
    pub total: String,
    pub email: String,
}

impl OrderRow {
    fn from_record(record: OrderRecord, email: &str) -> Self {
        Self {
            format_label: PurchaseFormat::label_for_key(&record.format),
            product: record.film_title,
            quantity: record.quantity,
            total: record.total,
            email: email.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrdersView {
    SignedOut,
    SessionExpired,
    Empty,
    Failed,
    Rows(Vec<OrderRow>),
}

impl OrdersView {
    /// Status text for views without rows.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            OrdersView::SignedOut => Some(messages::ORDERS_SIGNED_OUT),
            OrdersView::SessionExpired => Some(messages::SESSION_EXPIRED),
            OrdersView::Empty => Some(messages::ORDERS_EMPTY),
            OrdersView::Failed => Some(messages::ORDERS_FAILED),
            OrdersView::Rows(_) => None,
        }
    }
}

impl<T, S> Storefront<T, S>
where
    T: Transport,
    S: SessionStorage,
{
    pub async fn load_orders(&self) -> OrdersView {
        let (Some(_), Some(user)) = (self.session.get_token(), self.session.get()) else {
            return OrdersView::SignedOut;
        };

        match self.client.list_orders().await {
            Ok(records) if records.is_empty() => OrdersView::Empty,
            Ok(records) => OrdersView::Rows(
                records
                    .into_iter()
                    .map(|record| OrderRow::from_record(record, &user.email))
                    .collect(),
            ),
            Err(ApiError::Unauthorized { .. }) => OrdersView::SessionExpired,
            Err(err) if err.is_connection_failure() => {
                error!("failed to load orders: {}", err);
                OrdersView::Failed
            }
            Err(err) => {
                warn!("orders request rejected: {}", err);
                debug!("showing empty order history");
                OrdersView::Empty
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{signed_in, storefront};
    use fb_api_client::Method;

    #[tokio::test]
    async fn signed_out_sends_nothing() {
        let shop = storefront();
        assert_eq!(shop.load_orders().await, OrdersView::SignedOut);
        assert!(shop.client().transport().requests().is_empty());
    }

    #[tokio::test]
    async fn rows_carry_labels_and_email() {
        let shop = signed_in();
        shop.client().transport().respond(
            Method::Get,
            "/api/orders",
            200,
            r#"{"orders": [
                {"film_title": "Дюна", "format": "digital-atmos", "quantity": 1, "total": 1548},
                {"film_title": "Матрица", "format": "bluray", "quantity": 2, "total": 1386.5}
            ]}"#,
        );

        let OrdersView::Rows(rows) = shop.load_orders().await else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].format_label, "Цифровой Atmos + субтитры");
        assert_eq!(rows[0].email, "maria@example.com");
        assert_eq!(rows[1].format_label, "bluray");
        assert_eq!(rows[1].total, "1386.5");
    }

    #[tokio::test]
    async fn numeric_strings_and_nulls_still_render() {
        let shop = signed_in();
        shop.client().transport().respond(
            Method::Get,
            "/api/orders",
            200,
            r#"{"orders": [
                {"film_title": "Дюна", "format": "digital-hd", "quantity": 1, "total": "903.00"},
                {"film_title": "Матрица", "format": "digital-4k", "quantity": null, "total": null}
            ]}"#,
        );

        let OrdersView::Rows(rows) = shop.load_orders().await else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].quantity, "1");
        assert_eq!(rows[0].total, "903.00");
        assert_eq!(rows[0].format_label, "Цифровой Full HD");
        assert_eq!(rows[1].quantity, "");
        assert_eq!(rows[1].total, "");
    }

    #[tokio::test]
    async fn null_order_list_is_empty_history() {
        let shop = signed_in();
        shop.client()
            .transport()
            .respond(Method::Get, "/api/orders", 200, r#"{"orders": null}"#);
        assert_eq!(shop.load_orders().await, OrdersView::Empty);
    }

    #[tokio::test]
    async fn outcomes_by_response() {
        let cases = [
            (200, r#"{"orders": []}"#, OrdersView::Empty),
            (500, r#"{"error": "db down"}"#, OrdersView::Empty),
            (200, "not json", OrdersView::Failed),
        ];
        for (status, body, expected) in cases {
            let shop = signed_in();
            shop.client()
                .transport()
                .respond(Method::Get, "/api/orders", status, body);
            assert_eq!(shop.load_orders().await, expected, "{status} {body}");
        }
    }

    #[tokio::test]
    async fn forbidden_expires_session() {
        let shop = signed_in();
        shop.client()
            .transport()
            .respond(Method::Get, "/api/orders", 403, "");

        let view = shop.load_orders().await;
        assert_eq!(view, OrdersView::SessionExpired);
        assert_eq!(view.message(), Some("Сессия истекла. Пожалуйста, войдите снова."));
        assert!(!shop.session().is_authenticated());
    }

    #[tokio::test]
    async fn network_failure_is_reported() {
        let shop = signed_in();
        shop.client()
            .transport()
            .fail(Method::Get, "/api/orders", "dns error");
        assert_eq!(shop.load_orders().await, OrdersView::Failed);
    }
}

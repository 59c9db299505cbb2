use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Catalog identifier, normalized to a string at ingestion.
///
/// The backend sends numeric ids while the bundled fallback catalog uses
/// slugs, so both JSON numbers and strings deserialize into this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_owned())
    }

    /// Parse a location hash such as `#603`. Empty hashes yield `None`.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let id = hash.trim().trim_start_matches('#');
        if id.is_empty() {
            None
        } else {
            Some(Self::new(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id names a backend record (all ASCII digits).
    pub fn is_remote(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl From<u64> for MovieId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Text(s) => Self::new(s),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Russian,
    English,
}

impl Language {
    pub const PRIMARY: Language = Language::Russian;
    pub const ALTERNATE: Language = Language::English;

    pub fn code(self) -> &'static str {
        match self {
            Language::Russian => "ru-RU",
            Language::English => "en-US",
        }
    }
}

// ── Catalog ──

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

/// Catalog record as relayed by the backend proxy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawMovie {
    pub id: MovieId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopularPage {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Vec<RawMovie>,
}

// ── Auth ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Stored user profile. Fields beyond `name` and `email` are kept verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Body of a non-2xx backend response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// ── Orders ──

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub film_title: String,
    pub film_id: Option<MovieId>,
    pub format: String,
    pub quantity: u32,
    pub price: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CreateOrderResponse {
    /// Order id under `id`, `orderId`, `order_id` or `order.id`.
    pub fn order_id(&self) -> Option<String> {
        let nested = self.fields.get("order").and_then(|order| order.get("id"));
        ["id", "orderId", "order_id"]
            .iter()
            .find_map(|key| self.fields.get(*key))
            .or(nested)
            .and_then(|value| match value {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }
}

/// Order history line. Values are kept as display text because the backend
/// may send numeric columns as strings and leave any field null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    #[serde(default, deserialize_with = "display_text")]
    pub film_title: String,
    #[serde(default, deserialize_with = "display_text")]
    pub format: String,
    #[serde(default, deserialize_with = "display_text")]
    pub quantity: String,
    #[serde(default, deserialize_with = "display_text")]
    pub total: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub orders: Vec<OrderRecord>,
}

/// Any JSON scalar rendered as text; `null` becomes empty.
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_id_accepts_numbers_and_strings() {
        let numeric: MovieId = serde_json::from_str("603").unwrap();
        let text: MovieId = serde_json::from_str("\"603\"").unwrap();
        assert_eq!(numeric, text);
        assert!(numeric.is_remote());

        let slug: MovieId = serde_json::from_str("\"dune\"").unwrap();
        assert!(!slug.is_remote());
    }

    #[test]
    fn movie_id_from_hash() {
        assert_eq!(MovieId::from_hash("#438631"), Some(MovieId::from(438631_u64)));
        assert_eq!(MovieId::from_hash("#"), None);
        assert_eq!(MovieId::from_hash(""), None);
    }

    #[test]
    fn raw_movie_tolerates_sparse_records() {
        let movie: RawMovie = serde_json::from_str(r#"{"id": 27205, "title": "Начало"}"#).unwrap();
        assert_eq!(movie.id.as_str(), "27205");
        assert_eq!(movie.vote_average, None);
        assert!(movie.genres.is_none());
    }

    #[test]
    fn user_profile_keeps_extra_fields() {
        let raw = r#"{"name":"Anna","email":"anna@example.com","id":7}"#;
        let user: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(user.extra.get("id"), Some(&Value::from(7)));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["id"], 7);
        assert_eq!(back["email"], "anna@example.com");
    }

    #[test]
    fn order_request_uses_camel_case() {
        let req = CreateOrderRequest {
            film_title: "Дюна".into(),
            film_id: Some(MovieId::from(438631_u64)),
            format: "digital-hd".into(),
            quantity: 1,
            price: 903,
            total: 903,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["filmTitle"], "Дюна");
        assert_eq!(json["filmId"], "438631");
        assert_eq!(json["quantity"], 1);
    }

    #[test]
    fn order_history_is_read_leniently() {
        let body: OrdersResponse = serde_json::from_str(
            r#"{"orders": [
                {"film_title": "Дюна", "format": "digital-hd", "quantity": 1, "total": "903.00"},
                {"film_title": "Матрица", "format": null, "quantity": null, "total": 1386.5}
            ]}"#,
        )
        .unwrap();
        assert_eq!(body.orders[0].quantity, "1");
        assert_eq!(body.orders[0].total, "903.00");
        assert_eq!(body.orders[1].format, "");
        assert_eq!(body.orders[1].quantity, "");
        assert_eq!(body.orders[1].total, "1386.5");

        let null: OrdersResponse = serde_json::from_str(r#"{"orders": null}"#).unwrap();
        assert!(null.orders.is_empty());
        let missing: OrdersResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.orders.is_empty());
    }

    #[test]
    fn order_id_lookup() {
        let flat: CreateOrderResponse = serde_json::from_str(r#"{"orderId": 12}"#).unwrap();
        assert_eq!(flat.order_id().as_deref(), Some("12"));

        let nested: CreateOrderResponse =
            serde_json::from_str(r#"{"order": {"id": "ord_1"}}"#).unwrap();
        assert_eq!(nested.order_id().as_deref(), Some("ord_1"));

        let none: CreateOrderResponse = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert_eq!(none.order_id(), None);
    }
}

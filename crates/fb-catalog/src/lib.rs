//! Catalog domain: turning backend records into display records, pricing,
//! purchase formats and the in-session catalog cache.

mod cache;
mod fallback;
mod format;
mod movie;
mod price;
mod title;

pub use cache::CatalogCache;
pub use fallback::fallback_catalog;
pub use format::{PurchaseFormat, UnknownFormat};
pub use movie::{ImageProxy, MovieRecord, PLACEHOLDER_POSTER, transform_movie};
pub use price::{BASE_PRICE, DEFAULT_RATING, RATING_STEP, js_round, price_for_rating};
pub use title::{choose_title, is_readable_title};

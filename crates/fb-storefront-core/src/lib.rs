//! Storefront application layer.
//!
//! Everything the front ends do between a user action and the API, with no
//! dependency on a document: catalog loading, sign-in, checkout, order
//! history and the contact form. State lives in an explicit [`Storefront`]
//! context rather than in globals.

pub mod auth;
pub mod catalog;
pub mod contact;
mod context;
pub mod messages;
pub mod order;
pub mod orders;

#[cfg(test)]
mod testing;

pub use auth::{AuthMode, AuthOutcome, LoginForm, RegistrationForm, ValidationError};
pub use catalog::{CATALOG_PAGE_SIZE, HOME_GRID_SIZE};
pub use contact::ContactForm;
pub use context::Storefront;
pub use order::{OrderForm, OrderOutcome};
pub use orders::{OrderRow, OrdersView};

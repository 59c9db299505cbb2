//! Page state shared by every event handler.
//!
//! One `Ui` is created at startup and handed to handlers as `Rc<Ui>`
//! (WASM is single-threaded).

use crate::api::FetchTransport;
use crate::dom::Elements;
use crate::storage::BrowserSessionStorage;
use fb_storefront_core::{AuthMode, Storefront};
use std::cell::Cell;
use std::rc::Rc;

pub type Shop = Storefront<FetchTransport, BrowserSessionStorage>;

pub struct Ui {
    pub shop: Shop,
    pub els: Elements,
    auth_mode: Cell<AuthMode>,
}

impl Ui {
    pub fn new(shop: Shop, els: Elements) -> Rc<Self> {
        Rc::new(Self {
            shop,
            els,
            auth_mode: Cell::new(AuthMode::default()),
        })
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode.get()
    }

    pub fn set_auth_mode(&self, mode: AuthMode) {
        self.auth_mode.set(mode);
    }
}

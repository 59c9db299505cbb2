//! FilmBox storefront WASM front end.
//!
//! Binds the static storefront pages to the shared application layer in
//! `fb-storefront-core`. Every page loads the same module; views whose
//! container is missing from the page are skipped.

pub mod api;
pub mod auth_view;
pub mod catalog_view;
pub mod dom;
pub mod events;
pub mod layout;
pub mod logging;
pub mod order_view;
pub mod orders_view;
pub mod render;
pub mod state;
pub mod storage;

use fb_storefront_core::Storefront;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    init().await
}

async fn init() -> Result<(), JsValue> {
    let config = api::config_for_location();
    tracing::info!("storefront starting against {}", config.api_base());

    let shop = Storefront::new(api::FetchTransport, storage::BrowserSessionStorage, config);
    let ui = state::Ui::new(shop, dom::Elements::bind());

    auth_view::render_badges(&ui);
    events::bind_auth_events(&ui)?;

    {
        let ui = Rc::clone(&ui);
        wasm_bindgen_futures::spawn_local(async move {
            catalog_view::render_product_grid(&ui).await;
        });
    }
    catalog_view::render_films_catalog(&ui).await?;
    catalog_view::hydrate_product_page(&ui).await?;

    layout::highlight_nav();
    {
        let ui = Rc::clone(&ui);
        wasm_bindgen_futures::spawn_local(async move {
            orders_view::render_orders_table(&ui).await;
        });
    }
    layout::init_password_toggle(&ui.els)?;
    layout::init_burger_menu(&ui)?;
    layout::init_contact_form(&ui)?;

    Ok(())
}

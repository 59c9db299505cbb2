//! Home grid, catalog page and the movie detail section.

use crate::dom;
use crate::events::listen;
use crate::order_view;
use crate::render;
use crate::state::Ui;
use fb_api_types::MovieId;
use fb_storefront_core::messages;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

const SCROLL_DELAY_MS: u32 = 100;

pub async fn render_product_grid(ui: &Ui) {
    let Some(container) = &ui.els.product_grid else {
        return;
    };
    dom::set_inner_html(container, &render::loading(messages::LOADING_MOVIES));
    let movies = ui.shop.home_grid().await;
    dom::set_inner_html(container, &render::card_list(&movies, render::home_card));
}

pub async fn render_films_catalog(ui: &Rc<Ui>) -> Result<(), JsValue> {
    let Some(catalog) = &ui.els.films_catalog else {
        return Ok(());
    };
    dom::set_inner_html(catalog, &render::loading(messages::LOADING_MOVIES));
    let movies = ui.shop.load_catalog().await;
    dom::set_inner_html(catalog, &render::card_list(&movies, render::catalog_card));

    for btn in dom::query_all_within(catalog, ".select-film-btn") {
        bind_select(ui, &btn, true)?;
    }
    for card in dom::query_all_within(catalog, ".film-card") {
        bind_select(ui, &card, false)?;
    }
    Ok(())
}

fn bind_select(ui: &Rc<Ui>, el: &web_sys::Element, stop: bool) -> Result<(), JsValue> {
    let Some(id) = el
        .get_attribute("data-film-id")
        .and_then(|raw| MovieId::from_hash(&raw))
    else {
        return Ok(());
    };
    let ui = Rc::clone(ui);
    listen(el, "click", move |e: Event| {
        if stop {
            e.stop_propagation();
        }
        let ui = Rc::clone(&ui);
        let id = id.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = select_film(&ui, &id).await {
                warn!("select film {} failed: {:?}", id, err);
            }
        });
    })
}

pub async fn select_film(ui: &Rc<Ui>, id: &MovieId) -> Result<(), JsValue> {
    if ui.shop.select(id).await.is_none() {
        return Ok(());
    }
    if let Some(section) = &ui.els.product_section {
        dom::show(section, true);
    }
    gloo_utils::window().location().set_hash(id.as_str())?;
    hydrate_product_page(ui).await?;
    scroll_to_product(ui);
    Ok(())
}

/// Render the movie named by the location hash, if any.
pub async fn hydrate_product_page(ui: &Rc<Ui>) -> Result<(), JsValue> {
    let Some(detail) = &ui.els.product_detail else {
        return Ok(());
    };
    let hash = gloo_utils::window().location().hash()?;
    let Some(id) = MovieId::from_hash(&hash) else {
        return Ok(());
    };

    if ui.shop.cached(&id).is_none() && id.is_remote() {
        dom::set_inner_html(detail, &render::loading(messages::LOADING_MOVIE));
    }
    let Some(movie) = ui.shop.select(&id).await else {
        return Ok(());
    };

    if let Some(section) = &ui.els.product_section {
        dom::show(section, true);
    }
    dom::set_inner_html(detail, &render::product_detail(&movie));
    order_view::init_purchase_form(ui, &movie)?;

    let ui = Rc::clone(ui);
    Timeout::new(SCROLL_DELAY_MS, move || scroll_to_product(&ui)).forget();
    Ok(())
}

fn scroll_to_product(ui: &Ui) {
    let Some(section) = &ui.els.product_section else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}

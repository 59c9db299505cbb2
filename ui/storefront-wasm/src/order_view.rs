//! Purchase form on the movie detail section.

use crate::auth_view::{self, set_status};
use crate::dom;
use crate::events::listen;
use crate::state::Ui;
use fb_catalog::MovieRecord;
use fb_storefront_core::{OrderForm, OrderOutcome, messages};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlFormElement, HtmlInputElement};

/// Bind the freshly rendered purchase form to `movie`.
pub fn init_purchase_form(ui: &Rc<Ui>, movie: &MovieRecord) -> Result<(), JsValue> {
    let Some(form) = dom::by_id_typed::<HtmlFormElement>("purchaseForm") else {
        return Ok(());
    };
    let inputs = dom::query_all("input[name='filmFormat']");
    if inputs.is_empty() {
        return Ok(());
    }

    let order = Rc::new(RefCell::new(OrderForm::for_movie(movie)));

    for input in inputs {
        let order = Rc::clone(&order);
        let target = input.clone();
        listen(&input, "change", move |_| {
            let Some(radio) = target.dyn_ref::<HtmlInputElement>() else {
                return;
            };
            if let Err(err) = order.borrow_mut().select_format_key(&radio.value()) {
                warn!("{}", err);
            }
            recalc(&order.borrow());
        })?;
    }
    recalc(&order.borrow());

    let ui = Rc::clone(ui);
    listen(&form, "submit", move |e: Event| {
        e.prevent_default();
        let ui = Rc::clone(&ui);
        let snapshot = order.borrow().clone();
        wasm_bindgen_futures::spawn_local(async move {
            submit(&ui, &snapshot).await;
        });
    })
}

fn recalc(order: &OrderForm) {
    if let Some(total) = dom::by_id("orderTotal") {
        dom::set_text(&total, &format!("{} ₽", order.total()));
    }
    if let Some(name) = dom::by_id("selectedFormatName") {
        dom::set_text(&name, order.format_label());
    }
}

async fn submit(ui: &Ui, order: &OrderForm) {
    let status = dom::by_id("purchaseStatus");
    if ui.shop.session().is_authenticated() {
        set_status(status.as_ref(), messages::ORDER_PENDING, false);
    }

    let outcome = ui.shop.submit_order(order).await;
    set_status(status.as_ref(), &outcome.message(), outcome.is_error());
    if outcome == OrderOutcome::SessionExpired {
        auth_view::render_badges(ui);
    }
}

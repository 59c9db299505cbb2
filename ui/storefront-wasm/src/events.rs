//! Event binding.
//!
//! Wires the static page listeners. Async handlers are spawned via
//! `wasm_bindgen_futures::spawn_local`; closures are leaked with `forget`
//! since they live as long as the page.

use crate::auth_view;
use crate::state::Ui;
use fb_storefront_core::AuthMode;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// Attach `handler` to `target` for the page's lifetime.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Helper: run an async handler on `$event`, suppressing the default action.
macro_rules! on_event_async {
    ($el:expr, $event:expr, $ui:expr, $handler:expr) => {{
        let ui = Rc::clone($ui);
        listen($el, $event, move |e: Event| {
            e.prevent_default();
            let ui = Rc::clone(&ui);
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&ui).await;
            });
        })?;
    }};
}

/// Helper: open the auth modal in `$mode` on click.
macro_rules! opens_modal {
    ($el:expr, $ui:expr, $mode:expr) => {{
        let ui = Rc::clone($ui);
        listen($el, "click", move |e: Event| {
            e.prevent_default();
            auth_view::open_auth_modal(&ui, $mode);
        })?;
    }};
}

/// Auth forms, modal and header buttons. Call once after init.
pub fn bind_auth_events(ui: &Rc<Ui>) -> Result<(), JsValue> {
    let els = &ui.els;

    // ── Forms ──
    if let Some(form) = &els.register_form {
        on_event_async!(form, "submit", ui, auth_view::on_register);
    }
    if let Some(form) = &els.login_form {
        on_event_async!(form, "submit", ui, auth_view::on_login);
    }

    // ── Header ──
    if let Some(btn) = &els.logout_btn {
        let ui = Rc::clone(ui);
        listen(btn, "click", move |_| auth_view::logout(&ui))?;
    }
    if let Some(btn) = &els.login_btn_header {
        opens_modal!(btn, ui, AuthMode::Login);
    }
    if let Some(btn) = &els.register_btn_header {
        opens_modal!(btn, ui, AuthMode::Register);
    }
    if let Some(btn) = &els.hero_register_btn {
        opens_modal!(btn, ui, AuthMode::Register);
    }

    // ── Modal ──
    if let Some(tab) = &els.open_login {
        opens_modal!(tab, ui, AuthMode::Login);
    }
    if let Some(tab) = &els.open_register {
        opens_modal!(tab, ui, AuthMode::Register);
    }
    for link in &els.switch_to_login {
        opens_modal!(link, ui, AuthMode::Login);
    }
    for link in &els.switch_to_register {
        opens_modal!(link, ui, AuthMode::Register);
    }
    if let Some(btn) = &els.auth_modal_close {
        let ui = Rc::clone(ui);
        listen(btn, "click", move |_| auth_view::close_auth_modal(&ui))?;
    }
    if let Some(modal) = &els.auth_modal {
        let ui = Rc::clone(ui);
        let backdrop: EventTarget = modal.clone().into();
        listen(modal, "click", move |e: Event| {
            if e.target().as_ref() == Some(&backdrop) {
                auth_view::close_auth_modal(&ui);
            }
        })?;
    }

    Ok(())
}

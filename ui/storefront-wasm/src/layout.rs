//! Page chrome: nav highlight, burger menu, password toggles and the contact
//! form.

use crate::auth_view::{self, set_status};
use crate::dom::{self, Elements};
use crate::events::listen;
use crate::state::Ui;
use fb_storefront_core::{AuthMode, ContactForm};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlInputElement};

/// Mark nav links pointing at the page named by `<body data-page>`.
pub fn highlight_nav() {
    let Some(page) = gloo_utils::document()
        .body()
        .and_then(|body| body.get_attribute("data-page"))
    else {
        return;
    };
    for link in dom::query_all(".nav-link") {
        let href = link.get_attribute("href").unwrap_or_default();
        if href.contains(&page) {
            dom::add_class(&link, "active");
        }
    }
}

pub fn init_password_toggle(els: &Elements) -> Result<(), JsValue> {
    for btn in &els.password_toggles {
        let toggle = btn.clone();
        listen(btn, "click", move |_| {
            let Some(input) = toggle
                .closest(".password-wrapper")
                .ok()
                .flatten()
                .and_then(|wrapper| wrapper.query_selector("input").ok().flatten())
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let revealing = input.type_() == "password";
            input.set_type(if revealing { "text" } else { "password" });

            if let Ok(Some(eye)) = toggle.query_selector(".eye-icon") {
                dom::show(&eye, !revealing);
            }
            if let Ok(Some(eye_off)) = toggle.query_selector(".eye-off-icon") {
                dom::show(&eye_off, revealing);
            }
        })?;
    }
    Ok(())
}

fn close_menu(els: &Elements) {
    if let (Some(burger), Some(menu)) = (&els.burger_btn, &els.mobile_menu) {
        dom::remove_class(burger, "active");
        dom::add_class(menu, "hidden");
        dom::remove_class(menu, "open");
    }
}

pub fn init_burger_menu(ui: &Rc<Ui>) -> Result<(), JsValue> {
    let els = &ui.els;
    let (Some(burger), Some(menu)) = (&els.burger_btn, &els.mobile_menu) else {
        return Ok(());
    };

    {
        let burger_el = burger.clone();
        let menu = menu.clone();
        listen(burger, "click", move |_| {
            dom::flip_class(&burger_el, "active");
            dom::flip_class(&menu, "hidden");
            dom::flip_class(&menu, "open");
        })?;
    }

    for link in &els.mobile_nav_links {
        let ui = Rc::clone(ui);
        listen(link, "click", move |_| close_menu(&ui.els))?;
    }

    for (btn, mode) in [
        (&els.login_btn_mobile, AuthMode::Login),
        (&els.register_btn_mobile, AuthMode::Register),
    ] {
        if let Some(btn) = btn {
            let ui = Rc::clone(ui);
            listen(btn, "click", move |e: Event| {
                e.prevent_default();
                close_menu(&ui.els);
                auth_view::open_auth_modal(&ui, mode);
            })?;
        }
    }

    if let Some(btn) = &els.logout_btn_mobile {
        let ui = Rc::clone(ui);
        listen(btn, "click", move |_| {
            auth_view::logout(&ui);
            close_menu(&ui.els);
        })?;
    }
    Ok(())
}

pub fn init_contact_form(ui: &Rc<Ui>) -> Result<(), JsValue> {
    let Some(form) = &ui.els.contact_form else {
        return Ok(());
    };

    let prefill = ui.shop.contact_form();
    if !prefill.name.is_empty() || !prefill.email.is_empty() {
        dom::set_field_value(form, "contactName", &prefill.name);
        dom::set_field_value(form, "contactEmail", &prefill.email);
    }

    let ui = Rc::clone(ui);
    let form_el = form.clone();
    listen(form, "submit", move |e: Event| {
        e.prevent_default();
        let message = ContactForm {
            name: dom::field_value(&form_el, "contactName"),
            email: dom::field_value(&form_el, "contactEmail"),
            subject: dom::field_value(&form_el, "contactSubject"),
            message: dom::field_value(&form_el, "contactMessage"),
        };
        let status = ui.els.contact_status.as_ref();
        match ui.shop.submit_contact(&message) {
            Ok(ack) => {
                set_status(status, ack, false);
                form_el.reset();
            }
            Err(err) => set_status(status, &err.to_string(), true),
        }
    })
}

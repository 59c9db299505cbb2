//! Auth modal, sign-in forms and the header/mobile user badges.

use crate::dom;
use crate::render;
use crate::state::Ui;
use fb_storefront_core::{AuthMode, AuthOutcome, LoginForm, RegistrationForm, messages};
use tracing::warn;
use web_sys::Element;

pub fn show_auth_form(ui: &Ui, mode: AuthMode) {
    ui.set_auth_mode(mode);
    let els = &ui.els;
    let (Some(login), Some(register)) = (&els.login_form, &els.register_form) else {
        return;
    };
    let registering = mode == AuthMode::Register;
    dom::show(register, registering);
    dom::show(login, !registering);

    if let (Some(login_tab), Some(register_tab)) = (&els.open_login, &els.open_register) {
        let (active, idle) = if registering {
            (register_tab, login_tab)
        } else {
            (login_tab, register_tab)
        };
        dom::remove_class(active, "btn-ghost");
        dom::add_class(active, "btn-primary");
        dom::remove_class(idle, "btn-primary");
        dom::add_class(idle, "btn-ghost");
    }
}

pub fn open_auth_modal(ui: &Ui, mode: AuthMode) {
    let Some(modal) = &ui.els.auth_modal else {
        return;
    };
    show_auth_form(ui, mode);
    dom::show(modal, true);
    dom::lock_scroll(true);

    let first_field = match mode {
        AuthMode::Register => "#registerForm input[name='name']",
        AuthMode::Login => "#loginForm input[name='loginEmail']",
    };
    if let Some(input) = dom::query(first_field) {
        dom::focus(&input);
    }
}

pub fn close_auth_modal(ui: &Ui) {
    let Some(modal) = &ui.els.auth_modal else {
        return;
    };
    dom::show(modal, false);
    dom::lock_scroll(false);
    for status in [&ui.els.login_status, &ui.els.register_status].into_iter().flatten() {
        dom::set_inner_html(status, "");
    }
}

pub fn set_status(el: Option<&Element>, message: &str, is_error: bool) {
    if let Some(el) = el {
        dom::set_inner_html(el, &render::alert(message, is_error));
    }
}

fn show_signed_in(
    signed_in: bool,
    logout: &Option<Element>,
    login: &Option<Element>,
    register: &Option<Element>,
) {
    if let Some(btn) = logout {
        dom::show(btn, signed_in);
    }
    for btn in [login, register].into_iter().flatten() {
        dom::show(btn, !signed_in);
    }
}

pub fn render_user_badge(ui: &Ui) {
    let els = &ui.els;
    let Some(badge) = &els.user_badge else {
        return;
    };
    let user = ui.shop.session().get();
    match &user {
        Some(user) => {
            dom::set_text(badge, &messages::welcome(&user.name));
            dom::show(badge, true);
        }
        None => dom::set_text(badge, messages::GUEST),
    }
    show_signed_in(
        user.is_some(),
        &els.logout_btn,
        &els.login_btn_header,
        &els.register_btn_header,
    );
}

pub fn render_mobile_user_badge(ui: &Ui) {
    let els = &ui.els;
    let Some(badge) = &els.user_badge_mobile else {
        return;
    };
    let user = ui.shop.session().get();
    let text = user
        .as_ref()
        .map(|user| messages::greeting(&user.name))
        .unwrap_or_default();
    dom::set_text(badge, &text);
    show_signed_in(
        user.is_some(),
        &els.logout_btn_mobile,
        &els.login_btn_mobile,
        &els.register_btn_mobile,
    );
}

pub fn render_badges(ui: &Ui) {
    render_user_badge(ui);
    render_mobile_user_badge(ui);
}

fn finish(ui: &Ui, status: Option<&Element>, outcome: AuthOutcome) {
    if outcome.is_success() {
        if let Err(err) = gloo_utils::window().location().reload() {
            warn!("reload after sign-in failed: {:?}", err);
            close_auth_modal(ui);
            render_badges(ui);
        }
        return;
    }
    set_status(status, &outcome.message(), true);
}

pub async fn on_register(ui: &Ui) {
    let Some(form) = &ui.els.register_form else {
        return;
    };
    let fields = RegistrationForm {
        name: dom::field_value(form, "name"),
        email: dom::field_value(form, "email"),
        password: dom::field_value(form, "password"),
    };
    let outcome = ui.shop.register(&fields).await;
    finish(ui, ui.els.register_status.as_ref(), outcome);
}

pub async fn on_login(ui: &Ui) {
    let Some(form) = &ui.els.login_form else {
        return;
    };
    let fields = LoginForm {
        email: dom::field_value(form, "loginEmail"),
        password: dom::field_value(form, "loginPassword"),
    };
    let outcome = ui.shop.login(&fields).await;
    finish(ui, ui.els.login_status.as_ref(), outcome);
}

pub fn logout(ui: &Ui) {
    ui.shop.logout();
    render_badges(ui);
}

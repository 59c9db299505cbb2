//! DOM element bindings.
//!
//! The storefront is a set of static pages sharing one module, so every
//! element is optional. Elements that are rendered later (catalog cards, the
//! purchase form) are looked up when they appear, not here.

use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

// ── Helpers ──

pub fn by_id(id: &str) -> Option<Element> {
    gloo_utils::document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    gloo_utils::document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match gloo_utils::document().query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect(nl: &web_sys::NodeList) -> Vec<Element> {
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn flip_class(el: &Element, cls: &str) {
    let _ = el.class_list().toggle(cls);
}

pub fn show(el: &Element, visible: bool) {
    toggle_class(el, "hidden", !visible);
}

pub fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

/// Value of the named control inside `form`, trimmed.
pub fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Some(el) = form.query_selector(&format!("[name='{name}']")).ok().flatten() else {
        return String::new();
    };
    let raw = if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    };
    raw.trim().to_owned()
}

pub fn set_field_value(form: &HtmlFormElement, name: &str, value: &str) {
    let Some(el) = form.query_selector(&format!("[name='{name}']")).ok().flatten() else {
        return;
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Lock or release page scrolling behind a modal.
pub fn lock_scroll(locked: bool) {
    if let Some(body) = gloo_utils::document().body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

// ── Elements struct ──

/// Static page elements, resolved once at startup.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Catalog
    pub product_grid: Option<Element>,
    pub films_catalog: Option<Element>,
    pub product_section: Option<Element>,
    pub product_detail: Option<Element>,

    // Orders
    pub orders_table: Option<Element>,

    // Auth modal
    pub auth_modal: Option<Element>,
    pub auth_modal_close: Option<Element>,
    pub login_form: Option<HtmlFormElement>,
    pub register_form: Option<HtmlFormElement>,
    pub login_status: Option<Element>,
    pub register_status: Option<Element>,
    pub open_login: Option<Element>,
    pub open_register: Option<Element>,
    pub switch_to_login: Vec<Element>,
    pub switch_to_register: Vec<Element>,

    // Header
    pub user_badge: Option<Element>,
    pub login_btn_header: Option<Element>,
    pub register_btn_header: Option<Element>,
    pub hero_register_btn: Option<Element>,
    pub logout_btn: Option<Element>,

    // Mobile menu
    pub burger_btn: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub mobile_nav_links: Vec<Element>,
    pub user_badge_mobile: Option<Element>,
    pub login_btn_mobile: Option<Element>,
    pub register_btn_mobile: Option<Element>,
    pub logout_btn_mobile: Option<Element>,

    // Misc
    pub password_toggles: Vec<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub contact_status: Option<Element>,
}

impl Elements {
    pub fn bind() -> Elements {
        Elements {
            product_grid: by_id("productGrid"),
            films_catalog: by_id("filmsCatalog"),
            product_section: by_id("productSection"),
            product_detail: by_id("productDetail"),

            orders_table: by_id("ordersTable"),

            auth_modal: by_id("authModal"),
            auth_modal_close: by_id("authModalClose"),
            login_form: by_id_typed("loginForm"),
            register_form: by_id_typed("registerForm"),
            login_status: by_id("loginStatus"),
            register_status: by_id("registerStatus"),
            open_login: by_id("openLogin"),
            open_register: by_id("openRegister"),
            switch_to_login: query_all(".open-login-switch"),
            switch_to_register: query_all(".open-register-switch"),

            user_badge: by_id("userBadge"),
            login_btn_header: by_id("loginBtnHeader"),
            register_btn_header: by_id("registerBtnHeader"),
            hero_register_btn: by_id("heroRegisterBtn"),
            logout_btn: by_id("logoutBtn"),

            burger_btn: by_id("burgerBtn"),
            mobile_menu: by_id("mobileMenu"),
            mobile_nav_links: query_all("#mobileMenu .nav-link"),
            user_badge_mobile: by_id("userBadgeMobile"),
            login_btn_mobile: by_id("loginBtnMobile"),
            register_btn_mobile: by_id("registerBtnMobile"),
            logout_btn_mobile: by_id("logoutBtnMobile"),

            password_toggles: query_all(".toggle-password"),
            contact_form: by_id_typed("contactForm"),
            contact_status: by_id("contactStatus"),
        }
    }
}

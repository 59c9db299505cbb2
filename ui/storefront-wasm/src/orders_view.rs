use crate::auth_view;
use crate::dom;
use crate::render;
use crate::state::Ui;
use fb_storefront_core::OrdersView;

pub async fn render_orders_table(ui: &Ui) {
    let Some(table) = &ui.els.orders_table else {
        return;
    };
    let html = match ui.shop.load_orders().await {
        OrdersView::Rows(rows) => render::orders_table(&rows),
        view => {
            if view == OrdersView::SessionExpired {
                auth_view::render_badges(ui);
            }
            render::muted(view.message().unwrap_or_default())
        }
    };
    dom::set_inner_html(table, &html);
}

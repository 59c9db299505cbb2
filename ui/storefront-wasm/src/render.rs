//! HTML builders for the storefront views.
//!
//! Pure string functions with no DOM access. Every interpolated value goes
//! through [`escape`].

use fb_catalog::{MovieRecord, PurchaseFormat};
use fb_storefront_core::OrderRow;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn loading(message: &str) -> String {
    format!(
        r#"
    <div class="col-span-full text-center py-12">
      <div class="inline-block w-8 h-8 border-4 border-blue-500 border-t-transparent rounded-full animate-spin"></div>
      <p class="mt-4 text-slate-400">{}</p>
    </div>
  "#,
        escape(message)
    )
}

/// Status line under a form.
pub fn alert(message: &str, is_error: bool) -> String {
    let class = if is_error { "alert error" } else { "alert" };
    format!(r#"<div class="{class}">{}</div>"#, escape(message))
}

pub fn muted(message: &str) -> String {
    format!(r#"<p class="text-slate-400">{}</p>"#, escape(message))
}

pub fn home_card(movie: &MovieRecord) -> String {
    format!(
        r#"
        <article class="glass-card grid-card p-4 flex flex-col gap-4">
          <div class="poster-shadow aspect-[2/3] overflow-hidden rounded-lg">
            <img src="{poster}" alt="{title}" class="w-full h-full object-cover" loading="lazy" />
          </div>
          <div class="flex items-center justify-between text-sm text-slate-400">
            <span class="line-clamp-1">{genre}</span>
            <span><span class="star-list">★</span> {rating}</span>
          </div>
          <h3 class="text-xl font-semibold line-clamp-1">{title}</h3>
          <p class="text-slate-400 text-sm leading-relaxed line-clamp-2">{summary}</p>
          <div class="flex items-center justify-between">
            <div class="text-lg font-semibold">от {price} ₽</div>
            <a href="product.html#{id}" class="btn-ghost">Подробнее</a>
          </div>
        </article>
      "#,
        poster = escape(&movie.poster),
        title = escape(&movie.title),
        genre = escape(&movie.genre),
        rating = escape(&movie.rating_label()),
        summary = escape(&movie.summary),
        price = movie.starting_price(),
        id = escape(movie.id.as_str()),
    )
}

pub fn catalog_card(movie: &MovieRecord) -> String {
    format!(
        r#"
        <div class="glass-card grid-card overflow-hidden cursor-pointer film-card" data-film-id="{id}">
          <div class="poster-shadow aspect-[2/3] overflow-hidden">
            <img src="{poster}" alt="{title}" class="w-full h-full object-cover" loading="lazy" />
          </div>
          <div class="p-4 space-y-2">
            <div class="flex items-center justify-between">
              <span class="text-xs text-slate-400 line-clamp-1">{genre}</span>
              <span class="text-xs text-slate-400"><span class="star-list">★</span> {rating}</span>
            </div>
            <h3 class="font-semibold text-lg line-clamp-1">{title}</h3>
            <p class="text-sm text-slate-400 line-clamp-2">{summary}</p>
            <div class="flex items-center justify-between pt-2">
              <span class="font-bold text-lg">от {price} ₽</span>
              <span class="text-sm text-slate-400">{year}</span>
            </div>
            <button class="btn-primary w-full mt-2 select-film-btn" data-film-id="{id}">Выбрать</button>
          </div>
        </div>
      "#,
        id = escape(movie.id.as_str()),
        poster = escape(&movie.poster),
        title = escape(&movie.title),
        genre = escape(&movie.genre),
        rating = escape(&movie.rating_label()),
        summary = escape(&movie.summary),
        price = movie.starting_price(),
        year = movie.year_label(),
    )
}

pub fn card_list(movies: &[MovieRecord], card: fn(&MovieRecord) -> String) -> String {
    movies.iter().map(card).collect::<Vec<_>>().join("\n")
}

fn format_option(movie: &MovieRecord, format: PurchaseFormat) -> String {
    let checked = if format == PurchaseFormat::default() {
        " checked"
    } else {
        ""
    };
    format!(
        r#"
            <label class="btn-ghost flex items-center gap-2 format-option">
              <input type="radio" name="filmFormat" value="{key}"{checked} class="accent-blue-500" />
              <span>{label} <span class="text-blue-400 font-semibold">{price} ₽</span></span>
            </label>"#,
        key = format.key(),
        label = format.label(),
        price = movie.price_for(format),
    )
}

pub fn product_detail(movie: &MovieRecord) -> String {
    let default_format = PurchaseFormat::default();
    let options: String = PurchaseFormat::ALL
        .into_iter()
        .map(|format| format_option(movie, format))
        .collect();

    format!(
        r#"
    <div class="grid md:grid-cols-5 gap-8">
      <div class="md:col-span-2 poster-shadow">
        <img src="{poster}" alt="{title}" class="w-full h-full object-cover" loading="lazy" />
      </div>
      <div class="md:col-span-3 space-y-4">
        <div class="badge">{genre} · {year}</div>
        <h1 class="text-3xl md:text-4xl font-bold">{title}</h1>
        <p class="text-slate-300 leading-relaxed">{summary}</p>
        <div class="flex items-center gap-4 text-lg">
          <span class="text-2xl font-semibold">от {from} ₽</span>
          <span class="text-slate-400"><span class="star-detail">★</span> {rating} рейтинг</span>
        </div>
        <div class="glass-card p-4 space-y-3">
          <h3 class="font-semibold text-lg">Выберите формат</h3>
          <div class="flex gap-3 flex-wrap" id="formatSelection">{options}
          </div>
          <p class="text-sm text-slate-400">Мгновенная цифровая выдача после оплаты, без физических носителей.</p>
        </div>
        <div class="glass-card p-4 space-y-3">
          <h3 class="font-semibold text-lg">Оформление заказа</h3>
          <form id="purchaseForm" data-price="{price}" data-product="{title}" data-film-id="{id}" class="space-y-3">
            <div class="flex items-center justify-between text-lg">
              <span class="text-slate-400">Выбранный формат:</span>
              <span id="selectedFormatName" class="font-semibold">{format_label}</span>
            </div>
            <div class="flex items-center justify-between text-lg">
              <span class="text-slate-400">Итого</span>
              <span id="orderTotal" class="font-semibold text-xl">{from} ₽</span>
            </div>
            <div id="purchaseStatus" class="status-placeholder"></div>
            <button class="btn-primary w-full" type="submit">Купить</button>
          </form>
        </div>
      </div>
    </div>
  "#,
        poster = escape(&movie.poster),
        title = escape(&movie.title),
        genre = escape(&movie.genre),
        year = movie.year_label(),
        summary = escape(&movie.summary),
        from = movie.price_for(default_format),
        rating = escape(&movie.rating_label()),
        price = movie.price,
        id = escape(movie.id.as_str()),
        format_label = default_format.label(),
    )
}

pub fn orders_table(rows: &[OrderRow]) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{} ₽</td><td>{}</td></tr>",
                escape(&row.product),
                escape(&row.format_label),
                escape(&row.quantity),
                escape(&row.total),
                escape(&row.email)
            )
        })
        .collect();

    format!(
        r#"
    <div class="table-wrapper">
      <table class="table-lite">
        <thead>
          <tr><th>Товар</th><th>Формат</th><th>Количество</th><th>Сумма</th><th>Email</th></tr>
        </thead>
        <tbody>
          {body}
        </tbody>
      </table>
    </div>
  "#
    )
}

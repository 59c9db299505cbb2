use crate::format::PurchaseFormat;
use crate::price::{DEFAULT_RATING, price_for_rating};
use crate::title::choose_title;
use fb_api_types::{MovieId, RawMovie};
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/500x750?text=No+Poster";
const DEFAULT_GENRE: &str = "Фильм";
const DEFAULT_SUMMARY: &str = "Описание отсутствует.";

/// Builds image URLs served through the backend's image proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProxy {
    base: String,
}

impl ImageProxy {
    /// `base` is the full proxy prefix, e.g. `http://localhost:3000/api/image/w500`.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }
}

/// Display-ready catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    pub price: u32,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub poster: String,
    pub summary: String,
    pub backdrop: Option<String>,
}

impl MovieRecord {
    pub fn year_label(&self) -> String {
        self.year.map_or_else(|| "N/A".to_owned(), |y| y.to_string())
    }

    pub fn rating_label(&self) -> String {
        self.rating
            .map_or_else(|| "N/A".to_owned(), |r| format!("{r:.1}"))
    }

    /// Cheapest format price, shown on cards as "from".
    pub fn starting_price(&self) -> u32 {
        PurchaseFormat::DigitalHd.total(self.price)
    }

    pub fn price_for(&self, format: PurchaseFormat) -> u32 {
        format.total(self.price)
    }
}

fn release_year(date: &str) -> Option<i32> {
    let year = date.trim().split('-').next()?;
    if year.len() != 4 {
        return None;
    }
    year.parse().ok()
}

/// Normalize a backend record. `alternate_title` is the same record's title
/// in the alternate language, used when the localized one is unreadable.
pub fn transform_movie(raw: &RawMovie, alternate_title: Option<&str>, images: &ImageProxy) -> MovieRecord {
    let price = price_for_rating(raw.vote_average.unwrap_or(DEFAULT_RATING));

    let title = choose_title(
        raw.title.as_deref(),
        alternate_title,
        raw.original_title.as_deref(),
    );

    let genre = match &raw.genres {
        Some(genres) => genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(" / "),
        None => DEFAULT_GENRE.to_owned(),
    };

    let year = raw
        .release_date
        .as_deref()
        .filter(|d| !d.is_empty())
        .and_then(release_year);

    let rating = raw.vote_average.filter(|r| *r != 0.0);

    let poster = raw
        .poster_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .map_or_else(|| PLACEHOLDER_POSTER.to_owned(), |p| images.url(p));

    let summary = raw
        .overview
        .as_deref()
        .filter(|o| !o.is_empty())
        .unwrap_or(DEFAULT_SUMMARY)
        .to_owned();

    let backdrop = raw
        .backdrop_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| images.url(p));

    MovieRecord {
        id: raw.id.clone(),
        title,
        genre,
        price,
        year,
        rating,
        poster,
        summary,
        backdrop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_api_types::Genre;

    fn images() -> ImageProxy {
        ImageProxy::new("http://localhost:3000/api/image/w500")
    }

    fn raw(json: &str) -> RawMovie {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn full_record_is_normalized() {
        let movie = raw(
            r#"{
                "id": 438631,
                "title": "Дюна",
                "original_title": "Dune",
                "vote_average": 7.8,
                "release_date": "2021-09-15",
                "poster_path": "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg",
                "backdrop_path": "/iopYFB1b6Bh7FWZh3onQhph1sih.jpg",
                "overview": "Наследник знаменитого дома Атрейдесов...",
                "genres": [{"id": 878, "name": "фантастика"}, {"id": 12, "name": "приключения"}]
            }"#,
        );

        let record = transform_movie(&movie, Some("Dune"), &images());
        assert_eq!(record.id, MovieId::from(438631_u64));
        assert_eq!(record.title, "Дюна");
        assert_eq!(record.genre, "фантастика / приключения");
        assert_eq!(record.price, 1180);
        assert_eq!(record.year, Some(2021));
        assert_eq!(record.rating_label(), "7.8");
        assert_eq!(
            record.poster,
            "http://localhost:3000/api/image/w500/d5NXSklXo0qyIYkgV94XAgMIckC.jpg"
        );
        assert!(record.backdrop.is_some());
    }

    #[test]
    fn sparse_record_gets_defaults() {
        let record = transform_movie(&raw(r#"{"id": 1, "genre_ids": [18]}"#), None, &images());
        assert_eq!(record.price, 1140);
        assert_eq!(record.genre, "Фильм");
        assert_eq!(record.year_label(), "N/A");
        assert_eq!(record.rating_label(), "N/A");
        assert_eq!(record.poster, PLACEHOLDER_POSTER);
        assert_eq!(record.summary, "Описание отсутствует.");
        assert_eq!(record.backdrop, None);
        assert_eq!(record.title, "");
    }

    #[test]
    fn unreadable_title_uses_alternate_language() {
        let movie = raw(
            r#"{"id": 129, "title": "千と千尋の神隠し", "original_title": "千と千尋の神隠し", "vote_average": 8.5}"#,
        );
        let record = transform_movie(&movie, Some("Spirited Away"), &images());
        assert_eq!(record.title, "Spirited Away");
    }

    #[test]
    fn zero_rating_is_priced_but_not_shown() {
        let record = transform_movie(&raw(r#"{"id": 2, "vote_average": 0.0}"#), None, &images());
        assert_eq!(record.price, 790);
        assert_eq!(record.rating, None);
    }

    #[test]
    fn starting_price_is_full_hd_total() {
        let mut record = transform_movie(&raw(r#"{"id": 3, "vote_average": 8.0}"#), None, &images());
        assert_eq!(record.starting_price(), 833);
        record.price = 1000;
        assert_eq!(record.price_for(PurchaseFormat::DigitalAtmos), 1200);
    }

    #[test]
    fn empty_genre_list_renders_empty() {
        let movie = RawMovie {
            genres: Some(Vec::<Genre>::new()),
            ..raw(r#"{"id": 4}"#)
        };
        assert_eq!(transform_movie(&movie, None, &images()).genre, "");
    }

    #[test]
    fn image_proxy_joins_paths() {
        let proxy = ImageProxy::new("https://api.example.com/api/image/w500/");
        assert_eq!(proxy.url("/a.jpg"), "https://api.example.com/api/image/w500/a.jpg");
        assert_eq!(proxy.url("b.jpg"), "https://api.example.com/api/image/w500/b.jpg");
    }
}

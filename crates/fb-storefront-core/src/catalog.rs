use crate::context::Storefront;
use fb_api_client::Transport;
use fb_api_types::{Language, MovieId};
use fb_catalog::{MovieRecord, fallback_catalog, transform_movie};
use fb_session::SessionStorage;
use std::collections::HashMap;
use tracing::{debug, error, warn};

pub const HOME_GRID_SIZE: usize = 3;
pub const CATALOG_PAGE_SIZE: usize = 9;
const FIRST_PAGE: u32 = 1;

impl<T, S> Storefront<T, S>
where
    T: Transport,
    S: SessionStorage,
{
    /// Popular movies for `page`, localized, with alternate-language titles
    /// as fallbacks. Empty on failure.
    pub async fn fetch_popular(&self, page: u32) -> Vec<MovieRecord> {
        let primary = match self.client.list_popular(page, Language::PRIMARY).await {
            Ok(movies) => movies,
            Err(err) => {
                error!("failed to load popular movies: {}", err);
                return Vec::new();
            }
        };

        let alternate: HashMap<MovieId, String> =
            match self.client.list_popular(page, Language::ALTERNATE).await {
                Ok(movies) => movies
                    .into_iter()
                    .filter_map(|movie| movie.title.map(|title| (movie.id, title)))
                    .collect(),
                Err(err) => {
                    warn!("alternate titles unavailable for page {}: {}", page, err);
                    HashMap::new()
                }
            };

        primary
            .iter()
            .map(|raw| transform_movie(raw, alternate.get(&raw.id).map(String::as_str), &self.images))
            .collect()
    }

    /// One movie from the backend. `None` on failure.
    pub async fn fetch_details(&self, id: &MovieId) -> Option<MovieRecord> {
        let raw = match self.client.get_detail(id, Language::PRIMARY).await {
            Ok(raw) => raw,
            Err(err) => {
                error!("failed to load movie {}: {}", id, err);
                return None;
            }
        };

        let alternate = match self.client.get_detail(id, Language::ALTERNATE).await {
            Ok(alt) => alt.title,
            Err(err) => {
                warn!("alternate title unavailable for movie {}: {}", id, err);
                None
            }
        };

        Some(transform_movie(&raw, alternate.as_deref(), &self.images))
    }

    /// Movies for the home page grid.
    pub async fn home_grid(&self) -> Vec<MovieRecord> {
        let mut movies = self.fetch_popular(FIRST_PAGE).await;
        if movies.is_empty() {
            movies = fallback_catalog();
        }
        movies.truncate(HOME_GRID_SIZE);
        movies
    }

    /// Movies for the catalog page. The result becomes the catalog cache.
    pub async fn load_catalog(&self) -> Vec<MovieRecord> {
        let mut movies = self.fetch_popular(FIRST_PAGE).await;
        if movies.is_empty() {
            debug!("catalog empty, using fallback titles");
            movies = fallback_catalog();
        } else {
            movies.truncate(CATALOG_PAGE_SIZE);
        }
        self.cache.borrow_mut().replace(movies.clone());
        movies
    }

    /// Resolve a movie for the detail view: cache first, then the backend for
    /// remote ids. Fetched records are appended to the cache.
    pub async fn select(&self, id: &MovieId) -> Option<MovieRecord> {
        if let Some(hit) = self.cached(id) {
            return Some(hit);
        }
        if !id.is_remote() {
            return None;
        }

        let record = self.fetch_details(id).await?;
        self.cache.borrow_mut().append(record.clone());
        Some(record)
    }
}

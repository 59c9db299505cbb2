use fb_api_client::{ApiClient, ClientConfig, Transport};
use fb_catalog::{CatalogCache, ImageProxy, MovieRecord};
use fb_api_types::MovieId;
use fb_session::{SessionStorage, SessionStore};
use std::cell::RefCell;

/// Application context shared by every view of the storefront.
///
/// All methods take `&self`; the catalog cache is borrowed only between
/// awaits, so one context can be shared across event handlers via `Rc`.
pub struct Storefront<T, S> {
    pub(crate) client: ApiClient<T, S>,
    pub(crate) session: SessionStore<S>,
    pub(crate) images: ImageProxy,
    pub(crate) cache: RefCell<CatalogCache>,
}

impl<T, S> Storefront<T, S>
where
    T: Transport,
    S: SessionStorage,
{
    pub fn new(transport: T, storage: S, config: ClientConfig) -> Self {
        let session = SessionStore::new(storage);
        let images = ImageProxy::new(config.image_base());
        let client = ApiClient::new(transport, config, session.clone());
        Self {
            client,
            session,
            images,
            cache: RefCell::new(CatalogCache::new()),
        }
    }

    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn images(&self) -> &ImageProxy {
        &self.images
    }

    pub fn cached(&self, id: &MovieId) -> Option<MovieRecord> {
        self.cache.borrow().find(id).cloned()
    }

    pub fn cached_movies(&self) -> Vec<MovieRecord> {
        self.cache.borrow().records().to_vec()
    }
}

use crate::context::Storefront;
use fb_api_client::ClientConfig;
use fb_api_client::mock::MockTransport;
use fb_api_types::UserProfile;
use fb_session::InMemoryStorage;

pub(crate) const BASE: &str = "http://backend.test";

pub(crate) type TestStorefront = Storefront<MockTransport, InMemoryStorage>;

pub(crate) fn storefront() -> TestStorefront {
    Storefront::new(
        MockTransport::new(BASE),
        InMemoryStorage::new(),
        ClientConfig::new(BASE),
    )
}

pub(crate) fn signed_in() -> TestStorefront {
    let shop = storefront();
    shop.session().establish(
        "jwt-token",
        &UserProfile {
            name: "Мария".into(),
            email: "maria@example.com".into(),
            ..UserProfile::default()
        },
    );
    shop
}

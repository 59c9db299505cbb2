use anyhow::{Result, bail};
use clap::Subcommand;
use fb_api_client::Transport;
use fb_api_types::MovieId;
use fb_catalog::{MovieRecord, PurchaseFormat};
use fb_session::SessionStorage;
use fb_storefront_core::{
    ContactForm, LoginForm, OrderForm, OrdersView, RegistrationForm, Storefront, messages,
};

#[derive(Subcommand)]
pub enum Command {
    /// Popular movies for the home page
    Home,
    /// Full catalog page
    Catalog,
    /// Movie details with per-format prices
    Movie {
        /// Catalog id or slug, `#603` is accepted
        id: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "FILMBOX_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "FILMBOX_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Buy a movie
    Order {
        id: String,
        /// `digital-hd`, `digital-4k` or `digital-atmos`
        #[arg(short, long, default_value = "digital-hd")]
        format: PurchaseFormat,
    },
    /// Order history
    Orders,
    /// Send a message to support
    Contact {
        /// Defaults to the signed-in user's name
        #[arg(long)]
        name: Option<String>,
        /// Defaults to the signed-in user's email
        #[arg(long)]
        email: Option<String>,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(short, long)]
        message: String,
    },
}

pub async fn run<T, S>(shop: &Storefront<T, S>, command: Command) -> Result<String>
where
    T: Transport,
    S: SessionStorage,
{
    match command {
        Command::Home => Ok(movie_list(&shop.home_grid().await)),
        Command::Catalog => Ok(movie_list(&shop.load_catalog().await)),
        Command::Movie { id } => {
            let movie = resolve(shop, &id).await?;
            Ok(movie_detail(&movie))
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            let outcome = shop
                .register(&RegistrationForm {
                    name,
                    email,
                    password,
                })
                .await;
            if !outcome.is_success() {
                bail!(outcome.message());
            }
            Ok(outcome.message())
        }
        Command::Login { email, password } => {
            let outcome = shop.login(&LoginForm { email, password }).await;
            if !outcome.is_success() {
                bail!(outcome.message());
            }
            Ok(outcome.message())
        }
        Command::Logout => {
            shop.logout();
            Ok(messages::GUEST.to_owned())
        }
        Command::Whoami => Ok(match shop.session().get() {
            Some(user) => format!("{} <{}>", messages::greeting(&user.name), user.email),
            None => messages::GUEST.to_owned(),
        }),
        Command::Order { id, format } => {
            let movie = resolve(shop, &id).await?;
            let mut form = OrderForm::for_movie(&movie);
            form.select_format(format);
            let outcome = shop.submit_order(&form).await;
            if outcome.is_error() {
                bail!(outcome.message());
            }
            Ok(format!(
                "{}\n{}: {} ₽",
                outcome.message(),
                form.format_label(),
                form.total()
            ))
        }
        Command::Orders => match shop.load_orders().await {
            OrdersView::Rows(rows) => Ok(rows
                .iter()
                .map(|row| {
                    format!(
                        "{}\t{}\t{}\t{} ₽\t{}",
                        row.product, row.format_label, row.quantity, row.total, row.email
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")),
            view => Ok(view.message().unwrap_or_default().to_owned()),
        },
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let prefill = shop.contact_form();
            let form = ContactForm {
                name: name.unwrap_or(prefill.name),
                email: email.unwrap_or(prefill.email),
                subject,
                message,
            };
            Ok(shop.submit_contact(&form)?.to_owned())
        }
    }
}

// Slugs only live in the fallback catalog, so load it before looking one up.
async fn resolve<T, S>(shop: &Storefront<T, S>, raw: &str) -> Result<MovieRecord>
where
    T: Transport,
    S: SessionStorage,
{
    let Some(id) = MovieId::from_hash(raw) else {
        bail!("movie id is empty");
    };
    if !id.is_remote() {
        shop.load_catalog().await;
    }
    match shop.select(&id).await {
        Some(movie) => Ok(movie),
        None => bail!("movie {id} not found"),
    }
}

fn movie_list(movies: &[MovieRecord]) -> String {
    movies
        .iter()
        .map(|movie| {
            format!(
                "{:>8}  {} ({})  ★ {}  от {} ₽",
                movie.id,
                movie.title,
                movie.year_label(),
                movie.rating_label(),
                movie.starting_price()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn movie_detail(movie: &MovieRecord) -> String {
    let mut out = format!(
        "{} ({})\n{}  ★ {}\n\n{}\n",
        movie.title,
        movie.year_label(),
        movie.genre,
        movie.rating_label(),
        movie.summary
    );
    for format in PurchaseFormat::ALL {
        out.push_str(&format!(
            "\n  {:<14} {:<28} {} ₽",
            format.key(),
            format.label(),
            movie.price_for(format)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_api_client::mock::MockTransport;
    use fb_api_client::{ClientConfig, Method};
    use fb_session::FileStorage;

    const BASE: &str = "http://backend.test";

    fn shop(dir: &tempfile::TempDir) -> Storefront<MockTransport, FileStorage> {
        Storefront::new(
            MockTransport::new(BASE),
            FileStorage::new(dir.path().join("session.json")),
            ClientConfig::new(BASE),
        )
    }

    #[tokio::test]
    async fn movie_detail_lists_format_prices() {
        let dir = tempfile::tempdir().unwrap();
        let shop = shop(&dir);
        shop.client()
            .transport()
            .fail(Method::Get, "/api/movies/popular", "offline");

        let out = run(&shop, Command::Movie { id: "#dune".into() }).await.unwrap();
        assert!(out.starts_with("Дюна (2021)"), "{out}");
        assert!(out.contains("digital-hd"));
        assert!(out.contains("903 ₽"));
        assert!(out.contains("1548 ₽"));
    }

    #[tokio::test]
    async fn session_survives_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let first = shop(&dir);
        first.client().transport().respond(
            Method::Post,
            "/api/login",
            200,
            r#"{"token": "t-1", "user": {"name": "Анна", "email": "anna@example.com"}}"#,
        );
        let login = Command::Login {
            email: "Anna@example.com".into(),
            password: "Secret#12".into(),
        };
        run(&first, login).await.unwrap();

        let second = shop(&dir);
        let out = run(&second, Command::Whoami).await.unwrap();
        assert_eq!(out, "Привет, Анна <anna@example.com>");

        run(&second, Command::Logout).await.unwrap();
        assert_eq!(run(&shop(&dir), Command::Whoami).await.unwrap(), "Гость");
    }

    #[tokio::test]
    async fn orders_print_one_line_each() {
        let dir = tempfile::tempdir().unwrap();
        let shop = shop(&dir);
        shop.session().establish(
            "t-1",
            &fb_api_types::UserProfile {
                name: "Анна".into(),
                email: "anna@example.com".into(),
                ..Default::default()
            },
        );
        shop.client().transport().respond(
            Method::Get,
            "/api/orders",
            200,
            r#"{"orders": [
                {"film_title": "Дюна", "format": "digital-hd", "quantity": 1, "total": "903.00"},
                {"film_title": "Матрица", "format": "bluray", "quantity": 2, "total": 1386}
            ]}"#,
        );

        let out = run(&shop, Command::Orders).await.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "Дюна\tЦифровой Full HD\t1\t903.00 ₽\tanna@example.com",
                "Матрица\tbluray\t2\t1386 ₽\tanna@example.com",
            ]
        );
    }

    #[tokio::test]
    async fn order_without_session_fails() {
        let dir = tempfile::tempdir().unwrap();
        let shop = shop(&dir);
        shop.client()
            .transport()
            .fail(Method::Get, "/api/movies/popular", "offline");

        let err = run(
            &shop,
            Command::Order {
                id: "matrix".into(),
                format: PurchaseFormat::Digital4k,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), messages::ORDER_AUTH_REQUIRED);
        assert_eq!(shop.client().transport().count(Method::Post, "/api/orders"), 0);
    }

    #[tokio::test]
    async fn unknown_movie_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let shop = shop(&dir);
        shop.client()
            .transport()
            .respond(Method::Get, "/api/movies/404", 404, "{}");

        let err = run(&shop, Command::Movie { id: "404".into() }).await.unwrap_err();
        assert_eq!(err.to_string(), "movie 404 not found");
    }
}

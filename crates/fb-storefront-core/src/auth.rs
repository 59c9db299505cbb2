use crate::context::Storefront;
use crate::messages;
use fb_api_client::{ApiError, Transport};
use fb_api_types::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use fb_session::SessionStorage;
use thiserror::Error;
use tracing::{info, warn};

const MIN_PASSWORD_LEN: usize = 8;
const PASSWORD_SPECIALS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Which form the auth modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", messages::FILL_ALL_FIELDS)]
    MissingFields,
    #[error("{}", messages::INVALID_EMAIL)]
    InvalidEmail,
    #[error("{}", messages::PASSWORD_TOO_SHORT)]
    PasswordTooShort,
    #[error("{}", messages::PASSWORD_NEEDS_DIGIT)]
    PasswordNeedsDigit,
    #[error("{}", messages::PASSWORD_NEEDS_UPPERCASE)]
    PasswordNeedsUppercase,
    #[error("{}", messages::PASSWORD_NEEDS_SPECIAL)]
    PasswordNeedsSpecial,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim().to_lowercase();
        let password = self.password.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        check_password(password)?;

        Ok(RegisterRequest {
            name: name.to_owned(),
            email,
            password: password.to_owned(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = self.email.trim().to_lowercase();
        let password = self.password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(LoginRequest {
            email,
            password: password.to_owned(),
        })
    }
}

// Length counts UTF-16 units, matching the browser's `String.length`.
fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordNeedsDigit);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordNeedsUppercase);
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Err(ValidationError::PasswordNeedsSpecial);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    SignedIn(UserProfile),
    Invalid(ValidationError),
    Rejected(String),
    ConnectionFailed,
}

impl AuthOutcome {
    /// Text for the form's status line.
    pub fn message(&self) -> String {
        match self {
            AuthOutcome::SignedIn(user) => messages::welcome(&user.name),
            AuthOutcome::Invalid(err) => err.to_string(),
            AuthOutcome::Rejected(msg) => msg.clone(),
            AuthOutcome::ConnectionFailed => messages::CONNECTION_FAILED.to_owned(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::SignedIn(_))
    }
}

impl<T, S> Storefront<T, S>
where
    T: Transport,
    S: SessionStorage,
{
    pub async fn register(&self, form: &RegistrationForm) -> AuthOutcome {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => return AuthOutcome::Invalid(err),
        };
        let result = self.client.register(&request).await;
        self.complete_auth(result, messages::REGISTER_FAILED)
    }

    pub async fn login(&self, form: &LoginForm) -> AuthOutcome {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => return AuthOutcome::Invalid(err),
        };
        let result = self.client.login(&request).await;
        self.complete_auth(result, messages::LOGIN_FAILED)
    }

    pub fn logout(&self) {
        info!("signing out");
        self.session.clear();
    }

    fn complete_auth(&self, result: Result<AuthResponse, ApiError>, fallback: &str) -> AuthOutcome {
        match result {
            Ok(AuthResponse { token, user }) => {
                self.session.establish(&token, &user);
                info!("signed in as {}", user.email);
                AuthOutcome::SignedIn(user)
            }
            Err(err) if err.is_connection_failure() => {
                warn!("auth request failed: {}", err);
                AuthOutcome::ConnectionFailed
            }
            Err(err) => {
                warn!("auth rejected: {}", err);
                let message = err.backend_message().unwrap_or(fallback);
                AuthOutcome::Rejected(message.to_owned())
            }
        }
    }
}

use crate::auth::ValidationError;
use crate::context::Storefront;
use crate::messages;
use fb_api_client::Transport;
use fb_session::SessionStorage;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }
}

impl<T, S> Storefront<T, S>
where
    T: Transport,
    S: SessionStorage,
{
    /// Empty form with name and email taken from the session.
    pub fn contact_form(&self) -> ContactForm {
        let user = self.session.get().unwrap_or_default();
        ContactForm {
            name: user.name,
            email: user.email,
            ..ContactForm::default()
        }
    }

    /// Messages are acknowledged locally; there is no backend endpoint.
    pub fn submit_contact(&self, form: &ContactForm) -> Result<&'static str, ValidationError> {
        form.validate()?;
        info!(
            "contact message from {} <{}>: {}",
            form.name.trim(),
            form.email.trim(),
            form.subject.trim()
        );
        Ok(messages::CONTACT_SENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{signed_in, storefront};

    #[test]
    fn prefill_from_session() {
        let form = signed_in().contact_form();
        assert_eq!(form.name, "Мария");
        assert_eq!(form.email, "maria@example.com");
        assert!(form.message.is_empty());

        assert_eq!(storefront().contact_form(), ContactForm::default());
    }

    #[test]
    fn subject_is_optional() {
        let shop = storefront();
        let form = ContactForm {
            name: "Олег".into(),
            email: "oleg@example.com".into(),
            subject: String::new(),
            message: "Когда будет Дюна 3?".into(),
        };
        assert_eq!(shop.submit_contact(&form), Ok(messages::CONTACT_SENT));
        assert!(shop.client().transport().requests().is_empty());
    }

    #[test]
    fn blank_message_is_rejected() {
        let form = ContactForm {
            message: "   ".into(),
            ..signed_in().contact_form()
        };
        assert_eq!(storefront().submit_contact(&form), Err(ValidationError::MissingFields));
    }
}

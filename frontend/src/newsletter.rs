use log::{error, warn};

use crate::api::error::CmsError;
use crate::api::traits::NewsletterApi;
use crate::membership::validation::is_valid_email;

pub const SUBSCRIBED_MESSAGE: &str = "Mulțumim! Verifică emailul pentru confirmare.";
pub const INVALID_EMAIL_MESSAGE: &str = "Te rog introdu un email valid.";
pub const SUBSCRIBE_FAILED_MESSAGE: &str = "Nu am putut salva abonarea acum. Încearcă din nou.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewsletterStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl NewsletterStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            NewsletterStatus::Success => "newsletter-message success",
            NewsletterStatus::Error => "newsletter-message error",
            _ => "newsletter-message",
        }
    }
}

/// Footer signup form. `company` is a honeypot that real visitors never see.
#[derive(Clone, Debug, PartialEq)]
pub struct NewsletterForm {
    pub email: String,
    pub company: String,
    status: NewsletterStatus,
    message: Option<String>,
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            company: String::new(),
            status: NewsletterStatus::Idle,
            message: None,
        }
    }
}

impl NewsletterForm {
    pub fn status(&self) -> NewsletterStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == NewsletterStatus::Loading
    }

    /// Returns the trimmed address to send, or `None` when nothing should go out.
    pub fn begin_subscribe(&mut self) -> Option<String> {
        if self.is_loading() {
            return None;
        }
        if !self.company.is_empty() {
            warn!("Newsletter honeypot filled, dropping submission");
            return None;
        }

        let email = self.email.trim().to_string();
        if !is_valid_email(&email) {
            self.status = NewsletterStatus::Error;
            self.message = Some(INVALID_EMAIL_MESSAGE.to_string());
            return None;
        }

        self.status = NewsletterStatus::Loading;
        self.message = None;
        Some(email)
    }

    pub fn finish_subscribe(&mut self, result: Result<(), CmsError>) {
        match result {
            Ok(()) => {
                self.status = NewsletterStatus::Success;
                self.message = Some(SUBSCRIBED_MESSAGE.to_string());
                self.email.clear();
            }
            Err(err) => {
                error!("Newsletter subscribe error: {}", err);
                self.status = NewsletterStatus::Error;
                self.message = Some(SUBSCRIBE_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub async fn subscribe<A: NewsletterApi + ?Sized>(&mut self, api: &A) {
        let Some(email) = self.begin_subscribe() else {
            return;
        };
        let result = api.subscribe(&email).await;
        self.finish_subscribe(result);
    }
}

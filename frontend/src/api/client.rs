use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use log::{info, warn};
use serde::Serialize;
use serde_json::{json, Value};
use web_sys::{RequestCache, RequestCredentials, RequestMode};

use crate::api::error::{application_message_from_body, message_from_body, CmsError};
use crate::api::traits::{MembershipApi, NewsletterApi};
use crate::config;
use crate::content::journal::{Article, JournalListing};
use crate::content::main_page::MainPage;
use crate::membership::payload::ApplicationPayload;
use crate::membership::questions::{normalize_questions, Question};

pub const MAIN_PAGE_ENDPOINT: &str = "/api/mainpage/";
pub const JOURNAL_ENDPOINT: &str = "/api/jurnal/";
pub const QUESTIONS_ENDPOINT: &str = "/api/membrii/questions/";
pub const APPLICATIONS_ENDPOINT: &str = "/api/membrii/applications/";
pub const NEWSLETTER_ENDPOINT: &str = "/api/newsletter/subscribe/";

/// Thin JSON client over the headless CMS endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct CmsClient {
    base_url: String,
}

impl Default for CmsClient {
    fn default() -> Self {
        Self::new(config::get_backend_url())
    }
}

impl CmsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn article_endpoint(&self, slug: &str) -> String {
        self.endpoint(&format!("{}{}/", JOURNAL_ENDPOINT, urlencoding::encode(slug)))
    }

    async fn send(request: Request) -> Result<Response, CmsError> {
        request
            .send()
            .await
            .map_err(|e| CmsError::Network(e.to_string()))
    }

    async fn ensure_ok(response: Response) -> Result<Response, CmsError> {
        Self::ensure_ok_with(response, message_from_body).await
    }

    /// Non-2xx responses become `CmsError::Status`, carrying whatever message
    /// `extract` finds in the body.
    async fn ensure_ok_with(
        response: Response,
        extract: fn(&Value) -> Option<String>,
    ) -> Result<Response, CmsError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| extract(&body));
        Err(CmsError::Status { status, message })
    }

    async fn read_json(response: Response) -> Result<Value, CmsError> {
        response
            .json::<Value>()
            .await
            .map_err(|e| CmsError::Decode(e.to_string()))
    }

    async fn get_json(&self, url: &str, cache: Option<RequestCache>) -> Result<Value, CmsError> {
        let mut request = Request::get(url).header("Content-Type", "application/json");
        if let Some(cache) = cache {
            request = request.cache(cache);
        }
        let response = Self::ensure_ok(Self::send(request).await?).await?;
        Self::read_json(response).await
    }

    fn post_request<T: Serialize>(url: &str, body: &T) -> Result<Request, CmsError> {
        Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| CmsError::Serialize(e.to_string()))
    }

    pub async fn fetch_main_page(&self) -> Result<MainPage, CmsError> {
        let body = self
            .get_json(&self.endpoint(MAIN_PAGE_ENDPOINT), Some(RequestCache::NoStore))
            .await?;
        Ok(MainPage::from_json(&body))
    }

    pub async fn fetch_journal(&self) -> Result<JournalListing, CmsError> {
        let body = self.get_json(&self.endpoint(JOURNAL_ENDPOINT), None).await?;
        Ok(JournalListing::from_json(&body))
    }

    pub async fn fetch_article(&self, slug: &str) -> Result<Article, CmsError> {
        let request = Request::get(&self.article_endpoint(slug));
        let response = Self::send(request).await?;
        if response.status() == 404 {
            return Err(CmsError::NotFound);
        }
        let body = Self::read_json(Self::ensure_ok(response).await?).await?;
        Article::from_detail_json(&body, slug)
            .ok_or_else(|| CmsError::Decode(format!("article {} has no detail block", slug)))
    }
}

#[async_trait(?Send)]
impl MembershipApi for CmsClient {
    async fn fetch_questions(&self) -> Result<Vec<Question>, CmsError> {
        let body = self.get_json(&self.endpoint(QUESTIONS_ENDPOINT), None).await?;
        let questions = normalize_questions(&body);
        info!("Loaded {} membership questions", questions.len());
        Ok(questions)
    }

    async fn submit_application(&self, payload: &ApplicationPayload) -> Result<(), CmsError> {
        let request = Self::post_request(&self.endpoint(APPLICATIONS_ENDPOINT), payload)?;
        let response = Self::send(request).await?;
        match Self::ensure_ok_with(response, application_message_from_body).await {
            Ok(_) => {
                info!("Membership application accepted");
                Ok(())
            }
            Err(e) => {
                warn!("Membership application rejected: {}", e);
                Err(e)
            }
        }
    }
}

#[async_trait(?Send)]
impl NewsletterApi for CmsClient {
    /// Newsletter signups never need cookies, so they go out without credentials.
    async fn subscribe(&self, email: &str) -> Result<(), CmsError> {
        let request = Request::post(&self.endpoint(NEWSLETTER_ENDPOINT))
            .credentials(RequestCredentials::Omit)
            .mode(RequestMode::Cors)
            .header("Content-Type", "application/json")
            .json(&json!({ "email": email }))
            .map_err(|e| CmsError::Serialize(e.to_string()))?;
        Self::ensure_ok(Self::send(request).await?).await?;
        info!("Newsletter subscription accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = CmsClient::new("https://cms.example/");
        assert_eq!(
            client.endpoint(QUESTIONS_ENDPOINT),
            "https://cms.example/api/membrii/questions/"
        );
    }

    #[test]
    fn same_origin_client_uses_relative_paths() {
        let client = CmsClient::new("");
        assert_eq!(client.endpoint(MAIN_PAGE_ENDPOINT), "/api/mainpage/");
    }

    #[test]
    fn article_slug_is_percent_encoded() {
        let client = CmsClient::new("https://cms.example");
        assert_eq!(
            client.article_endpoint("spațiul ca mentor"),
            "https://cms.example/api/jurnal/spa%C8%9Biul%20ca%20mentor/"
        );
    }
}

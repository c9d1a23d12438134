//! Seams between the form state machines and the CMS.

use async_trait::async_trait;

use crate::api::error::CmsError;
use crate::membership::payload::ApplicationPayload;
use crate::membership::questions::Question;

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait MembershipApi {
    /// Active application questions, sorted by display order
    async fn fetch_questions(&self) -> Result<Vec<Question>, CmsError>;

    /// Submit a completed application; any 2xx response is success
    async fn submit_application(&self, payload: &ApplicationPayload) -> Result<(), CmsError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait NewsletterApi {
    async fn subscribe(&self, email: &str) -> Result<(), CmsError>;
}

use crate::data::models::newsletter_subscriber::{NewNewsletterSubscriber, NewsletterSubscriber};
use crate::data::models::user::UserRole;
use crate::data::repos::implementors::newsletter_repo::NewsletterRepo;
use crate::services::errors::NewsletterServiceError;

pub struct NewsletterService;

impl NewsletterService {
    pub fn new() -> Self {
        NewsletterService
    }

    /// Idempotent: subscribing an already-subscribed address succeeds
    /// without inserting a duplicate row.
    pub async fn subscribe(&self, email: &str) -> Result<(), NewsletterServiceError> {
        let email = email.trim();
        if !email.contains('@') || email.len() < 3 {
            return Err(NewsletterServiceError::InvalidEmail);
        }

        let repo = NewsletterRepo::new();

        if repo
            .get_by_email(email)
            .await
            .map_err(|_| NewsletterServiceError::DatabaseError)?
            .is_some()
        {
            return Ok(());
        }

        let subscriber = NewNewsletterSubscriber { email };

        repo.add(subscriber)
            .await
            .map_err(|_| NewsletterServiceError::DatabaseError)
    }

    /// Idempotent as well: unsubscribing an unknown address is a no-op.
    pub async fn unsubscribe(&self, email: &str) -> Result<(), NewsletterServiceError> {
        let repo = NewsletterRepo::new();
        repo.delete_by_email(email.trim())
            .await
            .map_err(|_| NewsletterServiceError::DatabaseError)
    }

    pub async fn get_subscribers(
        &self,
        role: UserRole,
    ) -> Result<Vec<NewsletterSubscriber>, NewsletterServiceError> {
        if !role.is_admin() {
            return Err(NewsletterServiceError::PermissionDenied);
        }

        let repo = NewsletterRepo::new();
        Ok(repo
            .get_all()
            .await
            .map_err(|_| NewsletterServiceError::DatabaseError)?
            .unwrap_or_default())
    }
}

impl Default for NewsletterService {
    fn default() -> Self {
        Self::new()
    }
}

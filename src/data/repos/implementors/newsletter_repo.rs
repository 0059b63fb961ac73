use crate::data::database;
use crate::data::models::newsletter_subscriber::{NewNewsletterSubscriber, NewsletterSubscriber};
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct NewsletterRepo {}

impl NewsletterRepo {
    pub fn new() -> Self {
        NewsletterRepo {}
    }

    pub async fn get_all(&self) -> Result<Option<Vec<NewsletterSubscriber>>, result::Error> {
        use crate::data::models::schema::newsletter_subscribers::dsl::newsletter_subscribers;

        let mut conn = database::connection().await?;

        match newsletter_subscribers
            .load::<NewsletterSubscriber>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn get_by_email(
        &self,
        email_query: &str,
    ) -> Result<Option<NewsletterSubscriber>, result::Error> {
        use crate::data::models::schema::newsletter_subscribers::dsl::{
            email, newsletter_subscribers,
        };

        let mut conn = database::connection().await?;

        match newsletter_subscribers
            .filter(email.eq(email_query))
            .first::<NewsletterSubscriber>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn add(&self, item: NewNewsletterSubscriber<'_>) -> Result<(), result::Error> {
        use crate::data::models::schema::newsletter_subscribers::dsl::newsletter_subscribers;

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(newsletter_subscribers)
                    .values(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    pub async fn delete_by_email(&self, email_query: &str) -> Result<(), result::Error> {
        use crate::data::models::schema::newsletter_subscribers::dsl::{
            email, newsletter_subscribers,
        };

        let mut conn = database::connection().await?;

        diesel::delete(newsletter_subscribers.filter(email.eq(email_query)))
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}

impl Default for NewsletterRepo {
    fn default() -> Self {
        Self::new()
    }
}

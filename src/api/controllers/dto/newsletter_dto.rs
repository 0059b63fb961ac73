use crate::data::models::newsletter_subscriber::NewsletterSubscriber;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct SubscriberResponse {
    pub subscriber_id: i32,
    pub email: String,
    pub subscribed_at: Option<String>,
}

impl From<NewsletterSubscriber> for SubscriberResponse {
    fn from(subscriber: NewsletterSubscriber) -> Self {
        Self {
            subscriber_id: subscriber.subscriber_id,
            email: subscriber.email,
            subscribed_at: subscriber.subscribed_at.map(|d| d.to_string()),
        }
    }
}

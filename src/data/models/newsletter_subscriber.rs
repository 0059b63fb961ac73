use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = newsletter_subscribers)]
#[diesel(primary_key(subscriber_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct NewsletterSubscriber {
    pub subscriber_id: i32,
    pub email: String,
    pub subscribed_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = newsletter_subscribers)]
pub struct NewNewsletterSubscriber<'a> {
    pub email: &'a str,
}

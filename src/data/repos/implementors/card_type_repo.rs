use crate::data::database;
use crate::data::models::card_type::{CardType, NewCardType, UpdateCardType};
use crate::data::models::product::CatalogStatus;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct CardTypeRepo {}

impl CardTypeRepo {
    pub fn new() -> Self {
        CardTypeRepo {}
    }

    pub async fn get_by_name(&self, name_query: &str) -> Result<Option<CardType>, result::Error> {
        use crate::data::models::schema::card_types::dsl::{card_types, name};

        let mut conn = database::connection().await?;

        match card_types
            .filter(name.eq(name_query))
            .first::<CardType>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Card types offered on the storefront.
    pub async fn get_active(&self) -> Result<Option<Vec<CardType>>, result::Error> {
        use crate::data::models::schema::card_types::dsl::{card_types, status};

        let mut conn = database::connection().await?;

        match card_types
            .filter(status.eq(CatalogStatus::Active.as_str()))
            .load::<CardType>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl Repository for CardTypeRepo {
    type Id = i32;
    type Item = CardType;
    type NewItem<'a> = NewCardType<'a>;
    type UpdateForm<'a> = UpdateCardType<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::card_types::dsl::card_types;

        let mut conn = database::connection().await?;

        match card_types.load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::card_types::dsl::{card_type_id, card_types};

        let mut conn = database::connection().await?;

        match card_types
            .filter(card_type_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::card_types::dsl::card_types;

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(card_types)
                    .values(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::card_types::dsl::{card_type_id, card_types};

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(card_types.filter(card_type_id.eq(id)))
                    .set(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    async fn delete(&self, id: Self::Id) -> Result<(), result::Error> {
        use crate::data::models::schema::card_types::dsl::{card_type_id, card_types};

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(card_types.filter(card_type_id.eq(id)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for CardTypeRepo {
    fn default() -> Self {
        Self::new()
    }
}

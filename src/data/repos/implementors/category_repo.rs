use crate::data::database;
use crate::data::models::category::{Category, NewCategory, UpdateCategory};
use crate::data::models::product::CatalogStatus;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct CategoryRepo {}

impl CategoryRepo {
    pub fn new() -> Self {
        CategoryRepo {}
    }

    pub async fn get_by_name(&self, name_query: &str) -> Result<Option<Category>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, name};

        let mut conn = database::connection().await?;

        match categories
            .filter(name.eq(name_query))
            .first::<Category>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Storefront listing: active categories only.
    pub async fn get_active(&self) -> Result<Option<Vec<Category>>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, status};

        let mut conn = database::connection().await?;

        match categories
            .filter(status.eq(CatalogStatus::Active.as_str()))
            .load::<Category>(&mut conn)
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
impl Repository for CategoryRepo {
    type Id = i32;
    type Item = Category;
    type NewItem<'a> = NewCategory<'a>;
    type UpdateForm<'a> = UpdateCategory<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::categories::dsl::categories;

        let mut conn = database::connection().await?;

        match categories.load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, category_id};

        let mut conn = database::connection().await?;

        match categories
            .filter(category_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::categories::dsl::categories;

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(categories)
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
        use crate::data::models::schema::categories::dsl::{categories, category_id};

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(categories.filter(category_id.eq(id)))
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
        use crate::data::models::schema::categories::dsl::{categories, category_id};

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(categories.filter(category_id.eq(id)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for CategoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

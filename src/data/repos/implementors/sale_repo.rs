use crate::data::database;
use crate::data::models::sale::{NewSale, Sale};
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct SaleRepo {}

impl SaleRepo {
    pub fn new() -> Self {
        SaleRepo {}
    }

    pub async fn get_all(&self) -> Result<Option<Vec<Sale>>, result::Error> {
        use crate::data::models::schema::sales::dsl::sales;

        let mut conn = database::connection().await?;

        match sales.load::<Sale>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn get_by_source(
        &self,
        source_query: &str,
    ) -> Result<Option<Vec<Sale>>, result::Error> {
        use crate::data::models::schema::sales::dsl::{sales, source};

        let mut conn = database::connection().await?;

        match sales
            .filter(source.eq(source_query))
            .load::<Sale>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn add(&self, item: NewSale<'_>) -> Result<(), result::Error> {
        use crate::data::models::schema::sales::dsl::sales;

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(sales)
                    .values(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for SaleRepo {
    fn default() -> Self {
        Self::new()
    }
}

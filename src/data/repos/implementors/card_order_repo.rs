use crate::data::database;
use crate::data::models::card_order::{CardOrder, NewCardOrder, UpdateCardOrder};
use crate::data::models::card_type::CardType;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

/// Card orders share the append-only discipline of product orders.
pub struct CardOrderRepo {}

impl CardOrderRepo {
    pub fn new() -> Self {
        CardOrderRepo {}
    }

    pub async fn get_all(&self) -> Result<Option<Vec<CardOrder>>, result::Error> {
        use crate::data::models::schema::card_orders::dsl::card_orders;

        let mut conn = database::connection().await?;

        match card_orders.load::<CardOrder>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CardOrder>, result::Error> {
        use crate::data::models::schema::card_orders::dsl::{card_order_id, card_orders};

        let mut conn = database::connection().await?;

        match card_orders
            .filter(card_order_id.eq(id))
            .first::<CardOrder>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn get_by_user_id(
        &self,
        user_id_query: i32,
    ) -> Result<Option<Vec<CardOrder>>, result::Error> {
        use crate::data::models::schema::card_orders::dsl::{card_orders, user_id};

        let mut conn = database::connection().await?;

        match card_orders
            .filter(user_id.eq(user_id_query))
            .load::<CardOrder>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn get_by_status(
        &self,
        status_query: &str,
    ) -> Result<Option<Vec<CardOrder>>, result::Error> {
        use crate::data::models::schema::card_orders::dsl::{card_orders, status};

        let mut conn = database::connection().await?;

        match card_orders
            .filter(status.eq(status_query))
            .load::<CardOrder>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Inserts the card order and returns its id.
    pub async fn add(&self, item: NewCardOrder<'_>) -> Result<i32, result::Error> {
        use crate::data::models::schema::card_orders::dsl::card_orders;

        let mut conn = database::connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(card_orders)
                    .values(&item)
                    .execute(connection)
                    .await?;

                let new_id: i32 = diesel::select(diesel::dsl::sql::<
                    diesel::sql_types::Integer,
                >("LAST_INSERT_ID()"))
                .get_result(connection)
                .await?;

                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    pub async fn update(&self, id: i32, item: UpdateCardOrder<'_>) -> Result<(), result::Error> {
        use crate::data::models::schema::card_orders::dsl::{card_order_id, card_orders};

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(card_orders.filter(card_order_id.eq(id)))
                    .set(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    /// Joins each card order with its card type for display.
    pub async fn attach_card_types(
        &self,
        orders_list: Vec<CardOrder>,
    ) -> Result<Vec<(CardOrder, CardType)>, result::Error> {
        if orders_list.is_empty() {
            return Ok(Vec::new());
        }

        use crate::data::models::schema::card_orders::dsl::{card_order_id, card_orders};
        use crate::data::models::schema::card_types::dsl::card_types;

        let mut conn = database::connection().await?;

        let ids: Vec<i32> = orders_list.iter().map(|o| o.card_order_id).collect();

        card_orders
            .inner_join(card_types)
            .filter(card_order_id.eq_any(ids))
            .load::<(CardOrder, CardType)>(&mut conn)
            .await
    }
}

impl Default for CardOrderRepo {
    fn default() -> Self {
        Self::new()
    }
}

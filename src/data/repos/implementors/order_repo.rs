use crate::data::database;
use crate::data::models::order::{NewOrder, Order, UpdateOrder};
use crate::data::models::order_product::{NewOrderProduct, OrderProduct};
use crate::data::models::product::Product;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use std::collections::HashMap;

/// Orders are an append-only audit trail: rows are inserted and their
/// status mutated, never deleted.
pub struct OrderRepo {}

impl OrderRepo {
    pub fn new() -> Self {
        OrderRepo {}
    }

    pub async fn get_all(&self) -> Result<Option<Vec<Order>>, result::Error> {
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = database::connection().await?;

        match orders.load::<Order>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = database::connection().await?;

        match orders
            .filter(order_id.eq(id))
            .first::<Order>(&mut conn)
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
    ) -> Result<Option<Vec<Order>>, result::Error> {
        use crate::data::models::schema::orders::dsl::{orders, user_id};

        let mut conn = database::connection().await?;

        match orders
            .filter(user_id.eq(user_id_query))
            .load::<Order>(&mut conn)
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
    ) -> Result<Option<Vec<Order>>, result::Error> {
        use crate::data::models::schema::orders::dsl::{orders, status};

        let mut conn = database::connection().await?;

        match orders
            .filter(status.eq(status_query))
            .load::<Order>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Inserts the order and its line-item snapshots in one transaction
    /// and returns the new order id.
    pub async fn create_with_items(
        &self,
        new_order: NewOrder<'_>,
        items: Vec<(i32, i32, BigDecimal)>,
    ) -> Result<i32, result::Error> {
        use crate::data::models::schema::order_products::dsl::order_products;
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = database::connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(orders)
                    .values(&new_order)
                    .execute(connection)
                    .await?;

                let new_id: i32 = diesel::select(diesel::dsl::sql::<
                    diesel::sql_types::Integer,
                >("LAST_INSERT_ID()"))
                .get_result(connection)
                .await?;

                let new_items: Vec<NewOrderProduct> = items
                    .into_iter()
                    .map(|(pid, qty, price)| NewOrderProduct {
                        order_id: new_id,
                        product_id: pid,
                        quantity: qty,
                        unit_price: price,
                    })
                    .collect();

                diesel::insert_into(order_products)
                    .values(&new_items)
                    .execute(connection)
                    .await?;

                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    /// Checkout path: order insert, line-item inserts and cart clear form
    /// a single transaction, so a failure anywhere leaves the cart intact.
    pub async fn create_with_items_clearing_cart(
        &self,
        new_order: NewOrder<'_>,
        items: Vec<(i32, i32, BigDecimal)>,
        cart_user_id: i32,
    ) -> Result<i32, result::Error> {
        use crate::data::models::schema::cart_items::dsl::{cart_items, user_id};
        use crate::data::models::schema::order_products::dsl::order_products;
        use crate::data::models::schema::orders::dsl::orders;

        let mut conn = database::connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(orders)
                    .values(&new_order)
                    .execute(connection)
                    .await?;

                let new_id: i32 = diesel::select(diesel::dsl::sql::<
                    diesel::sql_types::Integer,
                >("LAST_INSERT_ID()"))
                .get_result(connection)
                .await?;

                let new_items: Vec<NewOrderProduct> = items
                    .into_iter()
                    .map(|(pid, qty, price)| NewOrderProduct {
                        order_id: new_id,
                        product_id: pid,
                        quantity: qty,
                        unit_price: price,
                    })
                    .collect();

                diesel::insert_into(order_products)
                    .values(&new_items)
                    .execute(connection)
                    .await?;

                diesel::delete(cart_items.filter(user_id.eq(cart_user_id)))
                    .execute(connection)
                    .await?;

                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    pub async fn update(&self, id: i32, item: UpdateOrder<'_>) -> Result<(), result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(orders.filter(order_id.eq(id)))
                    .set(&item)
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    /// Joins each order with its line items and their product rows.
    pub async fn attach_products(
        &self,
        orders_list: Vec<Order>,
    ) -> Result<Vec<(Order, Vec<(OrderProduct, Product)>)>, result::Error> {
        if orders_list.is_empty() {
            return Ok(Vec::new());
        }

        use crate::data::models::schema::order_products::dsl::{order_id, order_products};
        use crate::data::models::schema::products::dsl::products;

        let mut conn = database::connection().await?;

        let ids: Vec<i32> = orders_list.iter().map(|o| o.order_id).collect();

        let items_data: Vec<(OrderProduct, Product)> = order_products
            .inner_join(products)
            .filter(order_id.eq_any(ids))
            .load::<(OrderProduct, Product)>(&mut conn)
            .await?;

        let mut map: HashMap<i32, Vec<(OrderProduct, Product)>> = HashMap::new();

        for item in items_data {
            map.entry(item.0.order_id).or_default().push(item);
        }

        let result = orders_list
            .into_iter()
            .map(|o| {
                let items = map.remove(&o.order_id).unwrap_or_default();
                (o, items)
            })
            .collect();

        Ok(result)
    }
}

impl Default for OrderRepo {
    fn default() -> Self {
        Self::new()
    }
}

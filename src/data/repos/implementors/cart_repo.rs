use crate::data::database;
use crate::data::models::cart_item::{CartItem, NewCartItem};
use crate::data::models::product::Product;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct CartRepo {}

impl CartRepo {
    pub fn new() -> Self {
        CartRepo {}
    }

    /// All cart rows for a user joined with their product details, oldest
    /// first.
    pub async fn get_by_user(
        &self,
        user_id_query: i32,
    ) -> Result<Vec<(CartItem, Product)>, result::Error> {
        use crate::data::models::schema::cart_items::dsl::{cart_item_id, cart_items, user_id};
        use crate::data::models::schema::products::dsl::products;

        let mut conn = database::connection().await?;

        cart_items
            .inner_join(products)
            .filter(user_id.eq(user_id_query))
            .order(cart_item_id.asc())
            .load::<(CartItem, Product)>(&mut conn)
            .await
    }

    pub async fn get_item(&self, id: i32) -> Result<Option<CartItem>, result::Error> {
        use crate::data::models::schema::cart_items::dsl::{cart_item_id, cart_items};

        let mut conn = database::connection().await?;

        match cart_items
            .filter(cart_item_id.eq(id))
            .first::<CartItem>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Find-or-increment add. The (user_id, product_id) pair is unique, so
    /// an existing row has its quantity raised instead of inserting a
    /// duplicate. Runs in a transaction to keep the check and the write
    /// together.
    pub async fn add_or_increment(
        &self,
        user_id_value: i32,
        product_id_value: i32,
        quantity_value: i32,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::cart_items::dsl::{
            cart_item_id, cart_items, product_id, quantity, user_id,
        };

        let mut conn = database::connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                let existing = cart_items
                    .filter(user_id.eq(user_id_value))
                    .filter(product_id.eq(product_id_value))
                    .first::<CartItem>(connection)
                    .await
                    .optional()?;

                match existing {
                    Some(item) => {
                        diesel::update(cart_items.filter(cart_item_id.eq(item.cart_item_id)))
                            .set(quantity.eq(item.quantity + quantity_value))
                            .execute(connection)
                            .await?;
                    }
                    None => {
                        let row = NewCartItem {
                            user_id: user_id_value,
                            product_id: product_id_value,
                            quantity: quantity_value,
                        };
                        diesel::insert_into(cart_items)
                            .values(&row)
                            .execute(connection)
                            .await?;
                    }
                }

                Ok(())
            }
            .scope_boxed()
        })
        .await
    }

    pub async fn set_quantity(&self, id: i32, quantity_value: i32) -> Result<(), result::Error> {
        use crate::data::models::schema::cart_items::dsl::{cart_item_id, cart_items, quantity};

        let mut conn = database::connection().await?;

        diesel::update(cart_items.filter(cart_item_id.eq(id)))
            .set(quantity.eq(quantity_value))
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    pub async fn delete_item(&self, id: i32) -> Result<(), result::Error> {
        use crate::data::models::schema::cart_items::dsl::{cart_item_id, cart_items};

        let mut conn = database::connection().await?;

        diesel::delete(cart_items.filter(cart_item_id.eq(id)))
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    pub async fn clear_by_user(&self, user_id_query: i32) -> Result<(), result::Error> {
        use crate::data::models::schema::cart_items::dsl::{cart_items, user_id};

        let mut conn = database::connection().await?;

        diesel::delete(cart_items.filter(user_id.eq(user_id_query)))
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}

impl Default for CartRepo {
    fn default() -> Self {
        Self::new()
    }
}

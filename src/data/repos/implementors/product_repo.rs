use crate::data::database;
use crate::data::models::product::{NewProduct, Product, UpdateProduct};
use crate::data::models::product::CatalogStatus;
use crate::data::models::product_image::{NewProductImage, ProductImage};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use std::collections::HashMap;

pub struct ProductRepo {}

impl ProductRepo {
    pub fn new() -> Self {
        ProductRepo {}
    }

    pub async fn get_by_name(&self, name_query: &str) -> Result<Option<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{name, products};

        let mut conn = database::connection().await?;

        match products
            .filter(name.eq(name_query))
            .first::<Product>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Storefront "new arrivals" strip: active products flagged latest.
    pub async fn get_latest(&self) -> Result<Option<Vec<Product>>, result::Error> {
        use crate::data::models::schema::products::dsl::{is_latest, products, status};

        let mut conn = database::connection().await?;

        match products
            .filter(is_latest.eq(true))
            .filter(status.eq(CatalogStatus::Active.as_str()))
            .load::<Product>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Inserts a product together with its ordered image rows in one
    /// transaction and returns the new product id.
    pub async fn add_with_images<'a>(
        &self,
        item: NewProduct<'a>,
        image_uris: Vec<String>,
    ) -> Result<i32, result::Error> {
        use crate::data::models::schema::product_images::dsl::product_images;
        use crate::data::models::schema::products::dsl::products;

        let mut conn = database::connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(products)
                    .values(&item)
                    .execute(connection)
                    .await?;

                let new_id: i32 = diesel::select(diesel::dsl::sql::<
                    diesel::sql_types::Integer,
                >("LAST_INSERT_ID()"))
                .get_result(connection)
                .await?;

                let rows: Vec<NewProductImage> = image_uris
                    .iter()
                    .enumerate()
                    .map(|(idx, uri)| NewProductImage {
                        product_id: new_id,
                        position: idx as i32,
                        image_uri: uri,
                    })
                    .collect();

                if !rows.is_empty() {
                    diesel::insert_into(product_images)
                        .values(&rows)
                        .execute(connection)
                        .await?;
                }

                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    /// Image rows for one product, in display order.
    pub async fn get_images(&self, id: i32) -> Result<Vec<ProductImage>, result::Error> {
        use crate::data::models::schema::product_images::dsl::{
            position, product_id, product_images,
        };

        let mut conn = database::connection().await?;

        product_images
            .filter(product_id.eq(id))
            .order(position.asc())
            .load::<ProductImage>(&mut conn)
            .await
    }

    /// Batched image lookup keyed by product id, for listings.
    pub async fn attach_images(
        &self,
        products_list: Vec<Product>,
    ) -> Result<Vec<(Product, Vec<ProductImage>)>, result::Error> {
        if products_list.is_empty() {
            return Ok(Vec::new());
        }

        use crate::data::models::schema::product_images::dsl::{
            position, product_id, product_images,
        };

        let mut conn = database::connection().await?;

        let ids: Vec<i32> = products_list.iter().map(|p| p.product_id).collect();

        let rows: Vec<ProductImage> = product_images
            .filter(product_id.eq_any(ids))
            .order(position.asc())
            .load::<ProductImage>(&mut conn)
            .await?;

        let mut map: HashMap<i32, Vec<ProductImage>> = HashMap::new();
        for row in rows {
            map.entry(row.product_id).or_default().push(row);
        }

        let result = products_list
            .into_iter()
            .map(|p| {
                let images = map.remove(&p.product_id).unwrap_or_default();
                (p, images)
            })
            .collect();

        Ok(result)
    }

    /// Number of cart and order rows still pointing at the product.
    /// A non-zero count blocks hard deletion.
    pub async fn reference_count(&self, id: i32) -> Result<i64, result::Error> {
        use crate::data::models::schema::cart_items::dsl as cart_dsl;
        use crate::data::models::schema::order_products::dsl as line_dsl;

        let mut conn = database::connection().await?;

        let cart_refs: i64 = cart_dsl::cart_items
            .filter(cart_dsl::product_id.eq(id))
            .count()
            .get_result(&mut conn)
            .await?;

        let order_refs: i64 = line_dsl::order_products
            .filter(line_dsl::product_id.eq(id))
            .count()
            .get_result(&mut conn)
            .await?;

        Ok(cart_refs + order_refs)
    }
}

#[async_trait]
impl Repository for ProductRepo {
    type Id = i32;
    type Item = Product;
    type NewItem<'a> = NewProduct<'a>;
    type UpdateForm<'a> = UpdateProduct<'a>;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::products::dsl::products;

        let mut conn = database::connection().await?;

        match products.load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::products::dsl::{product_id, products};

        let mut conn = database::connection().await?;

        match products
            .filter(product_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<(), result::Error> {
        use crate::data::models::schema::products::dsl::products;

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::insert_into(products)
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
        use crate::data::models::schema::products::dsl::{product_id, products};

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::update(products.filter(product_id.eq(id)))
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
        use crate::data::models::schema::products::dsl::{product_id, products};

        let mut conn = database::connection().await?;

        conn.transaction(|connection| {
            async move {
                diesel::delete(products.filter(product_id.eq(id)))
                    .execute(connection)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for ProductRepo {
    fn default() -> Self {
        Self::new()
    }
}

//! Sample data for development databases.
//!
//! A seed run clears every table children-first, inserts the fixed sample users
//! and products, links the first user and product through one cart and one
//! completed order, and reports row counts. Re-running is safe only because the
//! teardown wipes the previous cart and order; [`create_sample_relations`] on
//! its own is not idempotent.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, Set, TransactionTrait, sea_query::OnConflict,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    entity::{
        CartItems, Carts, OrderItems, Orders, Products, Users, cart_items, carts, order_items,
        orders::{self, OrderStatus},
        products, users,
    },
    error::{SeedError, SeedStage},
};

/// Quantity used for the sample cart item and order item.
pub const SAMPLE_QUANTITY: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleUser {
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleProduct {
    pub name: &'static str,
    pub description: &'static str,
    pub price: Decimal,
    pub image_url: &'static str,
    pub stock: i32,
    pub rating: f64,
}

/// Row counts after a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub users: u64,
    pub products: u64,
    pub orders: u64,
    pub carts: u64,
}

/// Records written by [`create_sample_relations`].
#[derive(Debug, Clone)]
pub struct SampleRelations {
    pub user: users::Model,
    pub product: products::Model,
    pub cart: carts::Model,
    pub cart_item: cart_items::Model,
    pub order: orders::Model,
    pub order_item: order_items::Model,
}

// Plaintext passwords are sample data, never a template for real accounts.
pub fn sample_users() -> Vec<SampleUser> {
    vec![
        SampleUser {
            name: "Ana Silva",
            email: "ana.silva@example.com",
            password: "senha123",
        },
        SampleUser {
            name: "Maria Santos",
            email: "maria.santos@example.com",
            password: "senha123",
        },
        SampleUser {
            name: "Carla Oliveira",
            email: "carla.oliveira@example.com",
            password: "senha123",
        },
    ]
}

pub fn sample_products() -> Vec<SampleProduct> {
    vec![
        SampleProduct {
            name: "Batom Vegano Rosé Natural",
            description: "Batom cremoso feito com ingredientes 100% naturais e veganos. Cor rosé suave para o dia a dia.",
            price: Decimal::new(2990, 2),
            image_url: "https://images.unsplash.com/photo-1586495777744-4413f21062fa?w=400",
            stock: 50,
            rating: 4.8,
        },
        SampleProduct {
            name: "Base Líquida Cobertura Natural",
            description: "Base vegana com cobertura natural e textura leve. Disponível em várias tonalidades.",
            price: Decimal::new(4550, 2),
            image_url: "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?w=400",
            stock: 30,
            rating: 4.6,
        },
        SampleProduct {
            name: "Máscara de Cílios Volume Extremo",
            description: "Máscara vegana que proporciona volume e alongamento natural dos cílios.",
            price: Decimal::new(3500, 2),
            image_url: "https://images.unsplash.com/photo-1567721913486-6585f069b332?w=400",
            stock: 40,
            rating: 4.9,
        },
        SampleProduct {
            name: "Paleta de Sombras Tons Terrosos",
            description: "Paleta com 12 cores veganas em tons terrosos para looks naturais e sofisticados.",
            price: Decimal::new(8990, 2),
            image_url: "https://images.unsplash.com/photo-1512496015851-a90fb38ba796?w=400",
            stock: 25,
            rating: 4.7,
        },
        SampleProduct {
            name: "Hidratante Facial Vegano",
            description: "Hidratante facial com ácido hialurônico e ingredientes naturais. Livre de crueldade animal.",
            price: Decimal::new(5200, 2),
            image_url: "https://images.unsplash.com/photo-1570194065650-d99fb4bedf0a?w=400",
            stock: 60,
            rating: 4.8,
        },
        SampleProduct {
            name: "Esmalte Vegano Verde Menta",
            description: "Esmalte vegano de longa duração na cor verde menta. Fórmula livre de tolueno e formaldeído.",
            price: Decimal::new(1890, 2),
            image_url: "https://images.unsplash.com/photo-1519014816548-bf5fe059798b?w=400",
            stock: 80,
            rating: 4.5,
        },
        SampleProduct {
            name: "Sérum Facial Anti-idade",
            description: "Sérum concentrado com vitamina C e ingredientes naturais para combater sinais de envelhecimento.",
            price: Decimal::new(7500, 2),
            image_url: "https://images.unsplash.com/photo-1611930022073-b7a4ba5fcccd?w=400",
            stock: 35,
            rating: 4.9,
        },
        SampleProduct {
            name: "Protetor Solar Facial FPS 60",
            description: "Protetor solar facial vegano com FPS 60. Base aquosa e de rápida absorção.",
            price: Decimal::new(4250, 2),
            image_url: "https://images.unsplash.com/photo-1556228720-195a672e8a03?w=400",
            stock: 45,
            rating: 4.6,
        },
    ]
}

/// Order total for `quantity` units at `price`.
pub fn order_total(price: Decimal, quantity: i32) -> Decimal {
    price * Decimal::from(quantity)
}

/// Run the whole seed sequence against `conn`.
pub async fn run_seed<C>(conn: &C) -> Result<SeedSummary, SeedError>
where
    C: ConnectionTrait + TransactionTrait,
{
    tracing::info!("starting database seed");

    let removed = teardown(conn).await?;
    tracing::info!(removed, "existing data cleared");

    let users = insert_sample_users(conn).await?;
    tracing::info!(count = users, "users created");

    let products = insert_sample_products(conn).await?;
    tracing::info!(count = products, "products created");

    match create_sample_relations(conn).await? {
        Some(sample) => tracing::info!(
            user = %sample.user.name,
            product = %sample.product.name,
            order_id = %sample.order.id,
            total = %sample.order.total,
            "sample cart and order created"
        ),
        None => tracing::info!("no user or product available, skipping sample cart and order"),
    }

    let summary = summarize(conn).await?;
    tracing::info!(
        users = summary.users,
        products = summary.products,
        orders = summary.orders,
        carts = summary.carts,
        "seeding completed"
    );
    Ok(summary)
}

/// Delete every row, children before parents, each table finished before the next starts.
///
/// Returns the number of rows removed across all tables.
pub async fn teardown<C: ConnectionTrait>(conn: &C) -> Result<u64, SeedError> {
    let mut removed = 0;
    removed += clear::<OrderItems, _>(conn).await?;
    removed += clear::<Orders, _>(conn).await?;
    removed += clear::<CartItems, _>(conn).await?;
    removed += clear::<Carts, _>(conn).await?;
    removed += clear::<Products, _>(conn).await?;
    removed += clear::<Users, _>(conn).await?;
    Ok(removed)
}

async fn clear<E, C>(conn: &C) -> Result<u64, SeedError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let table = E::default().table_name().to_owned();
    let result = E::delete_many()
        .exec(conn)
        .await
        .map_err(SeedError::at(SeedStage::Teardown))?;
    tracing::debug!(table = %table, removed = result.rows_affected, "table cleared");
    Ok(result.rows_affected)
}

/// Insert the sample users, skipping any whose email already exists.
///
/// Returns the number of rows actually inserted.
pub async fn insert_sample_users<C: ConnectionTrait>(conn: &C) -> Result<u64, SeedError> {
    let rows = sample_users().into_iter().map(|user| users::ActiveModel {
        id: Set(Uuid::now_v7()),
        name: Set(user.name.to_owned()),
        email: Set(user.email.to_owned()),
        password: Set(user.password.to_owned()),
        created_at: NotSet,
    });

    Users::insert_many(rows)
        .on_conflict(
            OnConflict::column(users::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
        .map_err(SeedError::at(SeedStage::Users))
}

/// Insert the sample products, skipping any whose name already exists.
pub async fn insert_sample_products<C: ConnectionTrait>(conn: &C) -> Result<u64, SeedError> {
    let rows = sample_products()
        .into_iter()
        .map(|product| products::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(product.name.to_owned()),
            description: Set(product.description.to_owned()),
            price: Set(product.price),
            image_url: Set(product.image_url.to_owned()),
            stock: Set(product.stock),
            rating: Set(product.rating),
            created_at: NotSet,
        });

    Products::insert_many(rows)
        .on_conflict(
            OnConflict::column(products::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
        .map_err(SeedError::at(SeedStage::Products))
}

/// Link the first user and first product through one cart and one completed order.
///
/// "First" means oldest `created_at`, ties broken by lowest id. Ids are UUID v7,
/// so the lowest id is the earliest generated. Returns `None` without writing
/// anything when there is no user or no product.
pub async fn create_sample_relations<C>(conn: &C) -> Result<Option<SampleRelations>, SeedError>
where
    C: ConnectionTrait + TransactionTrait,
{
    write_sample_relations(conn)
        .await
        .map_err(SeedError::at(SeedStage::SampleRelations))
}

async fn write_sample_relations<C>(conn: &C) -> Result<Option<SampleRelations>, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let user = Users::find()
        .order_by_asc(users::Column::CreatedAt)
        .order_by_asc(users::Column::Id)
        .one(conn)
        .await?;
    let product = Products::find()
        .order_by_asc(products::Column::CreatedAt)
        .order_by_asc(products::Column::Id)
        .one(conn)
        .await?;

    let (Some(user), Some(product)) = (user, product) else {
        return Ok(None);
    };

    let txn = conn.begin().await?;

    let cart = carts::ActiveModel {
        id: Set(Uuid::now_v7()),
        user_id: Set(user.id),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let cart_item = cart_items::ActiveModel {
        id: Set(Uuid::now_v7()),
        cart_id: Set(cart.id),
        product_id: Set(product.id),
        quantity: Set(SAMPLE_QUANTITY),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let order = orders::ActiveModel {
        id: Set(Uuid::now_v7()),
        user_id: Set(user.id),
        total: Set(order_total(product.price, SAMPLE_QUANTITY)),
        status: Set(OrderStatus::Completed),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let order_item = order_items::ActiveModel {
        id: Set(Uuid::now_v7()),
        order_id: Set(order.id),
        product_id: Set(product.id),
        quantity: Set(SAMPLE_QUANTITY),
        price: Set(product.price),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(Some(SampleRelations {
        user,
        product,
        cart,
        cart_item,
        order,
        order_item,
    }))
}

/// Count users, products, orders and carts. The four reads run concurrently.
pub async fn summarize<C: ConnectionTrait>(conn: &C) -> Result<SeedSummary, SeedError> {
    let (users, products, orders, carts) = tokio::try_join!(
        Users::find().count(conn),
        Products::find().count(conn),
        Orders::find().count(conn),
        Carts::find().count(conn),
    )
    .map_err(SeedError::at(SeedStage::Summary))?;

    Ok(SeedSummary {
        users,
        products,
        orders,
        carts,
    })
}

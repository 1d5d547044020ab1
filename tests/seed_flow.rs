mod common;

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serial_test::serial;
use vegan_cosmetics_api::{
    entity::{CartItems, Carts, OrderItems, Orders, Products, Users, orders::OrderStatus, users},
    seed::{
        SAMPLE_QUANTITY, create_sample_relations, insert_sample_products, insert_sample_users,
        order_total, run_seed, sample_products, sample_users, summarize, teardown,
    },
};

// Seed an empty store: every sample row lands and one cart/order pair links them.
#[tokio::test]
#[serial]
async fn seeding_an_empty_store_inserts_every_sample() -> anyhow::Result<()> {
    let Some(database_url) = common::database_url() else {
        return Ok(());
    };
    let orm = common::setup_conn(&database_url).await?;

    let summary = run_seed(&orm).await?;
    assert_eq!(summary.users, sample_users().len() as u64);
    assert_eq!(summary.products, sample_products().len() as u64);
    assert_eq!(summary.carts, 1);
    assert_eq!(summary.orders, 1);

    let order = Orders::find().one(&orm).await?.expect("sample order");
    let item = OrderItems::find().one(&orm).await?.expect("sample order item");
    let product = Products::find_by_id(item.product_id)
        .one(&orm)
        .await?
        .expect("ordered product");

    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(item.order_id, order.id);
    assert_eq!(item.quantity, SAMPLE_QUANTITY);
    assert_eq!(item.price, product.price);
    assert_eq!(order.total, order_total(product.price, SAMPLE_QUANTITY));

    let cart = Carts::find().one(&orm).await?.expect("sample cart");
    let cart_item = CartItems::find().one(&orm).await?.expect("sample cart item");
    assert_eq!(cart.user_id, order.user_id);
    assert_eq!(cart_item.cart_id, cart.id);
    assert_eq!(cart_item.product_id, product.id);
    assert_eq!(cart_item.quantity, SAMPLE_QUANTITY);

    orm.close().await?;
    Ok(())
}

// Rows from one multi-row insert share created_at, so the lowest v7 id decides.
#[tokio::test]
#[serial]
async fn sample_relations_use_the_first_inserted_user_and_product() -> anyhow::Result<()> {
    let Some(database_url) = common::database_url() else {
        return Ok(());
    };
    let orm = common::setup_conn(&database_url).await?;

    run_seed(&orm).await?;

    let cart = Carts::find().one(&orm).await?.expect("sample cart");
    let owner = Users::find_by_id(cart.user_id)
        .one(&orm)
        .await?
        .expect("cart owner");
    assert_eq!(owner.email, "ana.silva@example.com");

    let item = OrderItems::find().one(&orm).await?.expect("sample order item");
    let product = Products::find_by_id(item.product_id)
        .one(&orm)
        .await?
        .expect("ordered product");
    assert_eq!(product.name, "Batom Vegano Rosé Natural");
    assert_eq!(
        Orders::find().one(&orm).await?.expect("sample order").total,
        order_total(product.price, SAMPLE_QUANTITY)
    );

    orm.close().await?;
    Ok(())
}

#[tokio::test]
#[serial]
async fn seeding_twice_keeps_a_single_cart_and_order() -> anyhow::Result<()> {
    let Some(database_url) = common::database_url() else {
        return Ok(());
    };
    let orm = common::setup_conn(&database_url).await?;

    let first = run_seed(&orm).await?;
    let second = run_seed(&orm).await?;
    assert_eq!(first, second);
    assert_eq!(second.carts, 1);
    assert_eq!(second.orders, 1);

    orm.close().await?;
    Ok(())
}

// Only the teardown makes reruns safe; the relationship step alone duplicates.
#[tokio::test]
#[serial]
async fn sample_relations_without_teardown_are_duplicated() -> anyhow::Result<()> {
    let Some(database_url) = common::database_url() else {
        return Ok(());
    };
    let orm = common::setup_conn(&database_url).await?;

    run_seed(&orm).await?;
    let again = create_sample_relations(&orm).await?;
    assert!(again.is_some());

    let summary = summarize(&orm).await?;
    assert_eq!(summary.carts, 2);
    assert_eq!(summary.orders, 2);

    let summary = run_seed(&orm).await?;
    assert_eq!(summary.carts, 1);
    assert_eq!(summary.orders, 1);

    orm.close().await?;
    Ok(())
}

#[tokio::test]
#[serial]
async fn relations_are_skipped_when_a_side_is_empty() -> anyhow::Result<()> {
    let Some(database_url) = common::database_url() else {
        return Ok(());
    };
    let orm = common::setup_conn(&database_url).await?;

    assert!(create_sample_relations(&orm).await?.is_none());

    insert_sample_users(&orm).await?;
    assert!(create_sample_relations(&orm).await?.is_none());

    let summary = summarize(&orm).await?;
    assert_eq!(summary.carts, 0);
    assert_eq!(summary.orders, 0);
    assert_eq!(summary.products, 0);

    orm.close().await?;
    Ok(())
}

#[tokio::test]
#[serial]
async fn duplicate_samples_are_skipped_not_rejected() -> anyhow::Result<()> {
    let Some(database_url) = common::database_url() else {
        return Ok(());
    };
    let orm = common::setup_conn(&database_url).await?;

    assert_eq!(insert_sample_users(&orm).await?, 3);
    assert_eq!(insert_sample_users(&orm).await?, 0);
    assert_eq!(insert_sample_products(&orm).await?, 8);
    assert_eq!(insert_sample_products(&orm).await?, 0);

    let ana = Users::find()
        .filter(users::Column::Email.eq("ana.silva@example.com"))
        .count(&orm)
        .await?;
    assert_eq!(ana, 1);

    let removed = teardown(&orm).await?;
    assert_eq!(removed, 11);
    assert_eq!(Users::find().count(&orm).await?, 0);

    orm.close().await?;
    Ok(())
}

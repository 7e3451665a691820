// Behaviour that only the production backend shows. Needs docker:
// cargo test --features postgres-tests --test postgres_flow
#![cfg(feature = "postgres-tests")]

mod common;

use catalog_api::types::item::ItemFilter;
use catalog_api::types::merchant::MerchantFilter;
use common::{client::TestClient, test_data::price, TestContext};

#[tokio::test]
async fn test_name_search_folds_non_ascii_case() {
    let ctx = TestContext::postgres().await;
    let client = TestClient::new(ctx.db.clone());
    let merchant = client.create_merchant("Épicerie Fine").await;
    let eclair = client.create_item(merchant.id, "ÉCLAIR", "3.25").await;

    let found = ctx.db.find_item(&ItemFilter::by_name("éclair")).await.unwrap().unwrap();
    assert_eq!(found.id, eclair.id);

    let merchants = ctx.db.search_merchants(&MerchantFilter::by_name("épic")).await.unwrap();
    assert_eq!(merchants.iter().map(|m| m.id).collect::<Vec<_>>(), vec![merchant.id]);
}

#[tokio::test]
async fn test_prices_round_trip_through_numeric_columns() {
    let ctx = TestContext::postgres().await;
    let client = TestClient::new(ctx.db.clone());
    let merchant = client.create_merchant("Turing").await;
    let item = client.create_item(merchant.id, "Gumball", "0.10").await;

    let stored = ctx.db.get_item(item.id).await.unwrap();
    assert_eq!(stored.unit_price, price("0.10"));
    assert_eq!(stored.created_at, item.created_at);

    let at_most = ctx.db.find_item(&ItemFilter::by_price(None, Some(price("0.1")))).await.unwrap();
    assert_eq!(at_most.map(|i| i.id), Some(item.id));
}

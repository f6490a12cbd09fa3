//! Wire tests: the HTTP gateway against the stub storefront endpoint.

use std::sync::Arc;
use tokio::net::TcpListener;

use last_chance::{
    api::{create_router, ShopState},
    cart::{AddToCartRequest, CartError, CartGateway, HttpCartGateway},
    state::{VariantId, VariantState},
};

fn catalog_variant(id: u64, available: bool) -> VariantState {
    VariantState {
        id: VariantId(id),
        price: 2_499,
        compare_at_price: None,
        available,
        inventory_quantity: Some(8),
    }
}

async fn serve(shop: Arc<ShopState>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let authority = listener.local_addr().unwrap().to_string();
    let app = create_router(shop);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    authority
}

#[tokio::test]
async fn add_known_variant_round_trips() {
    let shop = Arc::new(ShopState::with_catalog(vec![catalog_variant(7001, true)]));
    let gateway = HttpCartGateway::new(serve(Arc::clone(&shop)).await);

    let summary = gateway
        .add_to_cart(AddToCartRequest::single(VariantId(7001)))
        .await
        .unwrap();
    assert_eq!(summary.item_count, 1);

    let summary = gateway
        .add_to_cart(AddToCartRequest::single(VariantId(7001)))
        .await
        .unwrap();
    assert_eq!(summary.item_count, 2);
    assert_eq!(shop.item_count(), 2);
}

#[tokio::test]
async fn unknown_variant_is_an_endpoint_rejection() {
    let shop = Arc::new(ShopState::with_catalog(vec![catalog_variant(7001, true)]));
    let gateway = HttpCartGateway::new(serve(shop).await);

    let err = gateway
        .add_to_cart(AddToCartRequest::single(VariantId(4)))
        .await
        .unwrap_err();
    match err {
        CartError::Endpoint { status, detail } => {
            assert_eq!(status, 422);
            assert!(detail.contains("not found"));
        }
        other => panic!("expected endpoint rejection, got {other}"),
    }
}

#[tokio::test]
async fn sold_out_variant_is_an_endpoint_rejection() {
    let shop = Arc::new(ShopState::with_catalog(vec![catalog_variant(7002, false)]));
    let gateway = HttpCartGateway::new(serve(shop).await);

    let err = gateway
        .add_to_cart(AddToCartRequest::single(VariantId(7002)))
        .await
        .unwrap_err();
    match err {
        CartError::Endpoint { status, detail } => {
            assert_eq!(status, 422);
            assert!(detail.contains("sold out"));
        }
        other => panic!("expected endpoint rejection, got {other}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let gateway = HttpCartGateway::new("127.0.0.1:9");
    let err = gateway
        .add_to_cart(AddToCartRequest::single(VariantId(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, CartError::Transport(_)));
}

use birdfarm_shop::api::errors::ApiError;
use birdfarm_shop::api::stub::StubApi;
use birdfarm_shop::domain::types::{ProductId, Quantity};
use birdfarm_shop::forms::cart::CheckoutForm;
use birdfarm_shop::forms::manager::{AddNestForm, AddSpecieForm};
use birdfarm_shop::query::{ListQuery, RATINGS_PAGE_SIZE};
use birdfarm_shop::services::{ServiceError, birds, cart, manager, nests, ratings};
use birdfarm_shop::store::{Cart, Wishlist};

mod common;

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        receiver: "Nguyen Van A".to_string(),
        phone: "0912345678".to_string(),
        address: "1 Hang Bai, Hanoi".to_string(),
        voucher: None,
    }
}

#[actix_web::test]
async fn test_bird_list_loads_page_and_species() {
    let api = common::stocked_api();
    let data = birds::load_bird_list(&api, ListQuery::default()).await.unwrap();

    assert_eq!(data.birds.items.len(), 3);
    assert_eq!(data.birds.total_pages, 1);
    assert_eq!(data.species.len(), 2);
    assert_eq!(data.query.page_number, 1);
}

#[actix_web::test]
async fn test_bird_list_applies_search_filter() {
    let api = common::stocked_api();
    let data = birds::load_bird_list(&api, ListQuery::decode("searchQuery=finch"))
        .await
        .unwrap();

    assert_eq!(data.birds.items.len(), 2);
    assert!(data.birds.items.iter().all(|b| b.name.to_lowercase().contains("finch")));
}

#[actix_web::test]
async fn test_bird_list_applies_specie_and_kind_filters() {
    let api = common::stocked_api();

    let data = birds::load_bird_list(&api, ListQuery::decode("specie=sp-canary"))
        .await
        .unwrap();
    assert_eq!(data.birds.items.len(), 1);
    assert_eq!(data.birds.items[0].id, "b3");

    let data = birds::load_bird_list(&api, ListQuery::decode("type=breed"))
        .await
        .unwrap();
    assert_eq!(data.birds.items.len(), 1);
    assert_eq!(data.birds.items[0].id, "b2");
}

#[actix_web::test]
async fn test_bird_list_no_matches_is_an_empty_ready_page() {
    let api = common::stocked_api();
    let data = birds::load_bird_list(&api, ListQuery::decode("searchQuery=ostrich"))
        .await
        .unwrap();
    assert!(data.birds.is_empty());
    assert!(data.birds.links.is_empty());
}

#[actix_web::test]
async fn test_bird_list_offline_backend_fails() {
    let api = StubApi {
        offline: true,
        ..common::stocked_api()
    };
    let err = birds::load_bird_list(&api, ListQuery::default()).await.unwrap_err();
    assert!(matches!(err, ServiceError::List(_)));
}

#[actix_web::test]
async fn test_nest_list_loads() {
    let api = common::stocked_api();
    let data = nests::load_nest_list(&api, ListQuery::default()).await.unwrap();
    assert_eq!(data.nests.items.len(), 2);
}

#[actix_web::test]
async fn test_rating_list_uses_ratings_page_size_and_average() {
    let api = common::stocked_api();
    let data = ratings::load_rating_list(&api, ListQuery::default()).await.unwrap();

    assert_eq!(data.query.page_size, RATINGS_PAGE_SIZE);
    assert_eq!(data.ratings.items.len(), 4);
    assert_eq!(data.average, Some(4.0));
}

#[actix_web::test]
async fn test_rating_value_filter_strip() {
    let api = common::stocked_api();
    let data = ratings::load_rating_list(&api, ListQuery::decode("value=5&pageNumber=2"))
        .await
        .unwrap();

    // Only five-star reviews remain.
    assert!(data.ratings.items.iter().all(|r| r.value == 5));
    assert_eq!(data.ratings.items.len(), 2);

    // "All" plus one button per star value, newest star first.
    assert_eq!(data.filters.len(), 6);
    assert_eq!(data.filters[0].label, "All");
    assert!(!data.filters[0].active);
    let active: Vec<&str> = data
        .filters
        .iter()
        .filter(|f| f.active)
        .map(|f| f.label.as_str())
        .collect();
    assert_eq!(active, vec!["5 stars"]);

    // Selecting a filter resets the page.
    assert!(data.filters[0].url.contains("pageNumber=1"));
}

#[actix_web::test]
async fn test_cart_page_resolves_lines_and_subtotal() {
    let api = common::stocked_api();
    let stored = Cart::default()
        .add_item(&ProductId::new("b1").unwrap(), Quantity::new(2).unwrap())
        .add_item(&ProductId::new("n1").unwrap(), Quantity::one());

    let data = cart::load_cart_page(&api, &stored).await.unwrap();

    assert_eq!(data.lines.len(), 2);
    let bird_line = data.lines.iter().find(|l| l.id == "b1").unwrap();
    assert_eq!(bird_line.collection, "bird");
    assert_eq!(bird_line.quantity, 2);
    assert_eq!(bird_line.line_total, Some(100));

    let nest_line = data.lines.iter().find(|l| l.id == "n1").unwrap();
    assert_eq!(nest_line.collection, "nest");
    assert_eq!(nest_line.line_total, Some(200));

    assert_eq!(data.subtotal, 300);
    assert_eq!(data.vouchers.len(), 1);
}

#[actix_web::test]
async fn test_cart_page_drops_ids_the_backend_no_longer_knows() {
    let api = common::stocked_api();
    let stored = Cart::default()
        .add_item(&ProductId::new("b1").unwrap(), Quantity::one())
        .add_item(&ProductId::new("gone").unwrap(), Quantity::one());

    let data = cart::load_cart_page(&api, &stored).await.unwrap();
    assert_eq!(data.lines.len(), 1);
    assert_eq!(data.lines[0].id, "b1");
    assert_eq!(data.subtotal, 50);
}

#[actix_web::test]
async fn test_wishlist_page_resolves_products() {
    let api = common::stocked_api();
    let wishlist = Wishlist::default()
        .set_wishlisted(&ProductId::new("b3").unwrap(), true)
        .set_wishlisted(&ProductId::new("n2").unwrap(), true);

    let data = cart::load_wishlist_page(&api, &wishlist).await.unwrap();
    assert_eq!(data.products.len(), 2);
    assert!(data.products.iter().all(|p| p.quantity == 1));
}

#[actix_web::test]
async fn test_checkout_places_the_order() {
    let api = common::stocked_api();
    let stored = Cart::default()
        .add_item(&ProductId::new("b1").unwrap(), Quantity::one())
        .add_item(&ProductId::new("n1").unwrap(), Quantity::one());

    let confirmation = cart::checkout(&api, &stored, checkout_form()).await.unwrap();
    assert!(!confirmation.id.is_empty());

    let orders = api.orders.lock().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].receiver, "Nguyen Van A");
    assert!(orders[0].phone.starts_with("+84"));
    assert_eq!(orders[0].birds, vec!["b1".to_string()]);
    assert_eq!(orders[0].nests, vec!["n1".to_string()]);
    assert!(orders[0].voucher.is_none());
}

#[actix_web::test]
async fn test_checkout_rejects_an_empty_cart() {
    let api = common::stocked_api();
    let err = cart::checkout(&api, &Cart::default(), checkout_form()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Form(_)));
    assert!(api.orders.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_checkout_rejects_a_bad_phone() {
    let api = common::stocked_api();
    let stored = Cart::default().add_item(&ProductId::new("b1").unwrap(), Quantity::one());
    let form = CheckoutForm {
        phone: "not a phone".to_string(),
        ..checkout_form()
    };

    let err = cart::checkout(&api, &stored, form).await.unwrap_err();
    assert!(matches!(err, ServiceError::Form(_)));
    assert!(api.orders.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_checkout_rejects_blank_fields() {
    let api = common::stocked_api();
    let stored = Cart::default().add_item(&ProductId::new("b1").unwrap(), Quantity::one());
    let form = CheckoutForm {
        receiver: String::new(),
        ..checkout_form()
    };

    let err = cart::checkout(&api, &stored, form).await.unwrap_err();
    assert!(matches!(err, ServiceError::Form(_)));
}

#[actix_web::test]
async fn test_checkout_fails_when_every_item_vanished() {
    let api = common::stocked_api();
    let stored = Cart::default().add_item(&ProductId::new("gone").unwrap(), Quantity::one());

    let err = cart::checkout(&api, &stored, checkout_form()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Form(_)));
    assert!(api.orders.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_manager_specie_list_and_search() {
    let api = common::stocked_api();
    let data = manager::load_specie_list(&api, ListQuery::default()).await.unwrap();
    assert_eq!(data.species.items.len(), 2);

    let data = manager::load_specie_list(&api, ListQuery::decode("searchQuery=can"))
        .await
        .unwrap();
    assert_eq!(data.species.items.len(), 1);
    assert_eq!(data.species.items[0].name, "Canary");
}

#[actix_web::test]
async fn test_manager_add_specie() {
    let api = common::stocked_api();
    let form = AddSpecieForm {
        name: "  Parrot  ".to_string(),
        image_url: Some("https://img.example/parrot.jpg".to_string()),
    };

    let created = manager::add_specie(&api, form).await.unwrap();
    assert_eq!(created.name, "Parrot");

    let recorded = api.created_species.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].name, "Parrot");
}

#[actix_web::test]
async fn test_manager_add_specie_rejects_blank_name() {
    let api = common::stocked_api();
    let form = AddSpecieForm {
        name: String::new(),
        image_url: None,
    };
    let err = manager::add_specie(&api, form).await.unwrap_err();
    assert!(matches!(err, ServiceError::Form(_)));
}

#[actix_web::test]
async fn test_manager_remove_specie() {
    let api = common::stocked_api();
    manager::remove_specie(&api, "sp-finch").await.unwrap();
    assert_eq!(*api.deleted_species.lock().unwrap(), vec!["sp-finch".to_string()]);

    let err = manager::remove_specie(&api, "sp-ghost").await.unwrap_err();
    assert!(matches!(err, ServiceError::Api(ApiError::Server { status: 404 })));
}

#[actix_web::test]
async fn test_manager_add_nest() {
    let api = common::stocked_api();
    let form = AddNestForm {
        name: "Lovebird nest".to_string(),
        specie: "sp-finch".to_string(),
        price: Some(300),
        dad: Some("b1".to_string()),
        mom: None,
    };

    manager::add_nest(&api, form).await.unwrap();

    let recorded = api.created_nests.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].name, "Lovebird nest");
    assert_eq!(recorded[0].dad.as_deref(), Some("b1"));
    assert!(recorded[0].mom.is_none());
}

use birdfarm_shop::domain::types::{ProductId, Quantity};
use birdfarm_shop::store::{Cart, Wishlist};

fn id(raw: &str) -> ProductId {
    ProductId::new(raw).unwrap()
}

fn qty(raw: u32) -> Quantity {
    Quantity::new(raw).unwrap()
}

#[test]
fn test_cart_add_and_increment() {
    let cart = Cart::default();
    let cart = cart.add_item(&id("b1"), qty(2));
    let cart = cart.add_item(&id("b1"), qty(3));
    let cart = cart.add_item(&id("n1"), Quantity::one());

    assert_eq!(cart.quantity("b1"), 5);
    assert_eq!(cart.quantity("n1"), 1);
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.product_ids(), vec!["b1".to_string(), "n1".to_string()]);
}

#[test]
fn test_cart_updates_do_not_mutate_the_original() {
    let original = Cart::default().add_item(&id("b1"), qty(1));
    let updated = original.add_item(&id("b2"), qty(1));

    assert_eq!(original.len(), 1);
    assert_eq!(updated.len(), 2);

    let removed = updated.remove_item(&id("b1"));
    assert_eq!(updated.quantity("b1"), 1);
    assert_eq!(removed.quantity("b1"), 0);
}

#[test]
fn test_cart_quantity_is_capped() {
    let cart = Cart::default().add_item(&id("b1"), qty(Quantity::MAX));
    let cart = cart.add_item(&id("b1"), qty(10));
    assert_eq!(cart.quantity("b1"), Quantity::MAX);
}

#[test]
fn test_cart_set_quantity_replaces() {
    let cart = Cart::default().add_item(&id("b1"), qty(5));
    let cart = cart.set_quantity(&id("b1"), qty(2));
    assert_eq!(cart.quantity("b1"), 2);
}

#[test]
fn test_cart_remove_unknown_id_is_a_no_op() {
    let cart = Cart::default().add_item(&id("b1"), qty(1));
    let cart = cart.remove_item(&id("ghost"));
    assert_eq!(cart.len(), 1);
}

#[test]
fn test_cart_wire_format_is_a_plain_map() {
    let cart = Cart::default()
        .add_item(&id("b1"), qty(2))
        .add_item(&id("n1"), qty(1));
    let json = serde_json::to_string(&cart).unwrap();
    assert_eq!(json, r#"{"b1":2,"n1":1}"#);

    let parsed: Cart = serde_json::from_str(r#"{"b1":2,"n1":1}"#).unwrap();
    assert_eq!(parsed, cart);
}

#[test]
fn test_wishlist_set_and_clear() {
    let wishlist = Wishlist::default().set_wishlisted(&id("b1"), true);
    assert!(wishlist.is_wishlisted("b1"));
    assert!(!wishlist.is_wishlisted("b2"));
    assert_eq!(wishlist.len(), 1);

    let cleared = wishlist.set_wishlisted(&id("b1"), false);
    assert!(!cleared.is_wishlisted("b1"));
    assert!(cleared.is_empty());
    assert!(wishlist.is_wishlisted("b1"));
}

#[test]
fn test_wishlist_cleared_flags_leave_no_key_behind() {
    let wishlist = Wishlist::default()
        .set_wishlisted(&id("b1"), true)
        .set_wishlisted(&id("b2"), true)
        .set_wishlisted(&id("b1"), false);

    let json = serde_json::to_string(&wishlist).unwrap();
    assert_eq!(json, r#"{"b2":true}"#);
    assert_eq!(wishlist.product_ids(), vec!["b2".to_string()]);
}

#[test]
fn test_clearing_an_absent_flag_is_a_no_op() {
    let wishlist = Wishlist::default().set_wishlisted(&id("ghost"), false);
    assert!(wishlist.is_empty());
}

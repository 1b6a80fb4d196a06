//! Store-backed tests. They need a MongoDB server on `TEST_MONGODB_URI` and
//! are ignored by default:
//!
//! ```sh
//! TEST_MONGODB_URI=mongodb://localhost:27017 cargo test --test store -- --ignored
//! ```

mod common;

use axum::http::StatusCode;
use mongodb::bson::{Document, doc};
use serde_json::json;

use common::{live_app, token_for};

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn duplicate_signup_is_a_no_op() {
    let app = live_app().await;
    let user = json!({ "email": "a@b.com", "displayName": "Ann", "role": "admin" });

    let (status, first) = app.send("POST", "/users", None, Some(user.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(first["insertedId"].is_string());

    let (status, second) = app.send("POST", "/users", None, Some(user)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["insertedId"], json!(null));
    assert_eq!(second["message"], json!("User Already Exists"));

    let users = app.db.collection::<Document>("users");
    assert_eq!(users.count_documents(doc! { "email": "a@b.com" }).await.unwrap(), 1);

    let stored = users.find_one(doc! { "email": "a@b.com" }).await.unwrap().unwrap();
    assert!(!stored.contains_key("role"));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn admin_routes_check_the_stored_role() {
    let app = live_app().await;
    let users = app.db.collection::<Document>("users");
    users
        .insert_one(doc! { "email": "boss@shop.com", "role": "admin" })
        .await
        .unwrap();
    users
        .insert_one(doc! { "email": "pat@shop.com" })
        .await
        .unwrap();

    let boss = token_for("boss@shop.com");
    let pat = token_for("pat@shop.com");
    let stranger = token_for("nobody@shop.com");

    let (status, body) = app.send("GET", "/users", Some(boss.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    for token in [pat.as_str(), stranger.as_str()] {
        let (status, body) = app.send("GET", "/users", Some(token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "message": "Forbidden access" }));
    }

    let (_, body) = app
        .send("GET", "/users/admin/boss@shop.com", Some(boss.as_str()), None)
        .await;
    assert_eq!(body, json!({ "admin": true }));

    let (_, body) = app
        .send("GET", "/users/admin/pat@shop.com", Some(pat.as_str()), None)
        .await;
    assert_eq!(body, json!({ "admin": false }));

    let (_, body) = app
        .send("GET", "/users/admin/nobody@shop.com", Some(stranger.as_str()), None)
        .await;
    assert_eq!(body, json!({ "admin": false }));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn malformed_user_documents_are_denied_not_errors() {
    let app = live_app().await;
    let users = app.db.collection::<Document>("users");
    users
        .insert_one(doc! { "email": "odd@shop.com", "role": 1 })
        .await
        .unwrap();
    users
        .insert_one(doc! { "_id": "legacy", "email": "old@shop.com", "role": "user" })
        .await
        .unwrap();

    for email in ["odd@shop.com", "old@shop.com"] {
        let token = token_for(email);

        let (status, body) = app.send("GET", "/users", Some(token.as_str()), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "message": "Forbidden access" }));

        let (status, body) = app
            .send("GET", &format!("/users/admin/{}", email), Some(token.as_str()), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "admin": false }));
    }

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn granting_admin_takes_effect_immediately() {
    let app = live_app().await;
    let users = app.db.collection::<Document>("users");
    users
        .insert_one(doc! { "email": "boss@shop.com", "role": "admin" })
        .await
        .unwrap();
    let pat_id = users
        .insert_one(doc! { "email": "pat@shop.com" })
        .await
        .unwrap()
        .inserted_id
        .as_object_id()
        .unwrap();

    let boss = token_for("boss@shop.com");
    let pat = token_for("pat@shop.com");

    let (status, body) = app
        .send("PATCH", &format!("/users/admin/{}", pat_id), Some(boss.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchedCount"], json!(1));
    assert_eq!(body["modifiedCount"], json!(1));

    let (status, _) = app.send("GET", "/allorders", Some(pat.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn profile_update_leaves_other_fields() {
    let app = live_app().await;
    let users = app.db.collection::<Document>("users");
    users
        .insert_one(doc! { "email": "a@b.com", "displayName": "Ann", "phone": "1" })
        .await
        .unwrap();

    let (status, body) = app
        .send(
            "PATCH",
            "/users",
            None,
            Some(json!({ "email": "a@b.com", "phone": "2" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Profile updated successfully" }));

    let stored = users.find_one(doc! { "email": "a@b.com" }).await.unwrap().unwrap();
    assert_eq!(stored.get_str("displayName").unwrap(), "Ann");
    assert_eq!(stored.get_str("phone").unwrap(), "2");
    assert!(!stored.contains_key("photoURL"));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn product_patch_changes_only_given_fields() {
    let app = live_app().await;
    let boss_token = token_for("boss@shop.com");
    app.db
        .collection::<Document>("users")
        .insert_one(doc! { "email": "boss@shop.com", "role": "admin" })
        .await
        .unwrap();

    let (status, created) = app
        .send(
            "POST",
            "/products",
            Some(boss_token.as_str()),
            Some(json!({
                "name": "Apple",
                "category": "Fruit",
                "price": 2.5,
                "description": "Crisp",
                "images": ["apple.png"],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["insertedId"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send(
            "PATCH",
            &format!("/products/{}", id),
            None,
            Some(json!({ "price": 3.0 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["matchedCount"], json!(1));

    let (_, products) = app.send("GET", "/products", None, None).await;
    let product = &products.as_array().unwrap()[0];
    assert_eq!(product["_id"], json!(id));
    assert_eq!(product["price"], json!(3.0));
    assert_eq!(product["name"], json!("Apple"));
    assert_eq!(product["category"], json!("Fruit"));
    assert_eq!(product["description"], json!("Crisp"));
    assert_eq!(product["images"], json!(["apple.png"]));

    let (status, deleted) = app
        .send("DELETE", &format!("/products/{}", id), Some(boss_token.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deletedCount"], json!(1));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn products_keep_values_as_sent() {
    let app = live_app().await;
    let boss_token = token_for("boss@shop.com");
    app.db
        .collection::<Document>("users")
        .insert_one(doc! { "email": "boss@shop.com", "role": "admin" })
        .await
        .unwrap();

    let (status, created) = app
        .send(
            "POST",
            "/products",
            Some(boss_token.as_str()),
            Some(json!({ "price": "12.99", "availability": true, "images": "a.png" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["insertedId"].as_str().unwrap().to_string();

    let (status, _) = app
        .send(
            "PATCH",
            &format!("/products/{}", id),
            None,
            Some(json!({ "rating": "4.5", "sale": false })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, products) = app.send("GET", "/products", None, None).await;
    let product = &products.as_array().unwrap()[0];
    assert_eq!(product["price"], json!("12.99"));
    assert_eq!(product["availability"], json!(true));
    assert_eq!(product["images"], json!("a.png"));
    assert_eq!(product["rating"], json!("4.5"));
    assert_eq!(product["sale"], json!(false));
    assert!(product.get("name").is_none());

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn reviews_are_listed_under_their_product() {
    let app = live_app().await;
    let product = "65a1f0c2b3d4e5f601234567";
    let other = "65a1f0c2b3d4e5f601234568";

    let (status, review) = app
        .send(
            "POST",
            &format!("/products/{}/reviews", product),
            None,
            Some(json!({ "rating": 5, "text": "Fresh" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["reviewId"], json!(product));
    assert!(review["createdAt"].is_string());
    assert!(review["_id"].is_string());

    app.send(
        "POST",
        &format!("/products/{}/reviews", other),
        None,
        Some(json!({ "rating": 1 })),
    )
    .await;

    let (status, reviews) = app
        .send("GET", &format!("/products/{}/reviews", product), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviews, json!([review]));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn comments_are_listed_under_their_blog() {
    let app = live_app().await;
    let blog = "65a1f0c2b3d4e5f601234569";

    let (status, comment) = app
        .send(
            "POST",
            &format!("/blogs/{}/comments", blog),
            None,
            Some(json!({ "text": "Nice read", "name": "Ann" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["blogId"], json!(blog));
    assert_eq!(comment["name"], json!("Ann"));

    let (_, comments) = app
        .send("GET", &format!("/blogs/{}/comments", blog), None, None)
        .await;
    assert_eq!(comments, json!([comment]));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn clearing_a_cart_removes_only_that_customer() {
    let app = live_app().await;

    for (email, name) in [("a@b.com", "Apple"), ("a@b.com", "Pear"), ("c@d.com", "Fig")] {
        let (status, _) = app
            .send(
                "POST",
                "/carts",
                None,
                Some(json!({ "email": email, "name": name, "quantity": 1 })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = app.send("DELETE", "/carts?email=a@b.com", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], json!(2));

    let (_, left) = app.send("GET", "/carts?email=c@d.com", None, None).await;
    assert_eq!(left.as_array().unwrap().len(), 1);

    let (status, body) = app.send("DELETE", "/carts?email=a@b.com", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No cart items found" }));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn wishlist_item_lifecycle() {
    let app = live_app().await;

    let (_, created) = app
        .send(
            "POST",
            "/wishlist",
            None,
            Some(json!({ "email": "a@b.com", "name": "Apple" })),
        )
        .await;
    let id = created["insertedId"].as_str().unwrap().to_string();

    let (_, items) = app.send("GET", "/wishlist?email=a@b.com", None, None).await;
    assert_eq!(items[0]["name"], json!("Apple"));

    let (_, deleted) = app
        .send("DELETE", &format!("/wishlist/{}", id), None, None)
        .await;
    assert_eq!(deleted["deletedCount"], json!(1));

    let (status, deleted) = app
        .send("DELETE", &format!("/wishlist/{}", id), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deletedCount"], json!(0));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn orders_are_created_and_listed_by_owner() {
    let app = live_app().await;

    let (status, order) = app
        .send(
            "POST",
            "/orders",
            None,
            Some(json!({
                "email": "a@b.com",
                "items": [ { "name": "Apple", "quantity": 2 } ],
                "total": 42,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(order["_id"].is_string());
    assert!(order["createdAt"].is_string());
    assert_eq!(order["total"], json!(42));

    let owner = token_for("a@b.com");
    let (status, orders) = app
        .send("GET", "/orders?email=a@b.com", Some(owner.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders, json!([order]));

    let id = order["_id"].as_str().unwrap();
    let intruder = token_for("c@d.com");
    let (status, _) = app
        .send("DELETE", &format!("/orders/{}", id), Some(intruder.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, deleted) = app
        .send("DELETE", &format!("/orders/{}", id), Some(owner.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deletedCount"], json!(1));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn billing_is_reachable_under_both_paths() {
    let app = live_app().await;

    app.send(
        "POST",
        "/billing",
        None,
        Some(json!({ "email": "a@b.com", "card": "visa" })),
    )
    .await;
    app.send(
        "POST",
        "/billings",
        None,
        Some(json!({ "email": "a@b.com", "card": "amex" })),
    )
    .await;

    let (_, bills) = app.send("GET", "/billings?email=a@b.com", None, None).await;
    assert_eq!(bills.as_array().unwrap().len(), 2);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires TEST_MONGODB_URI"]
async fn hot_deals_need_admin_to_create() {
    let app = live_app().await;
    app.db
        .collection::<Document>("users")
        .insert_one(doc! { "email": "boss@shop.com", "role": "admin" })
        .await
        .unwrap();
    let deal = json!({ "title": "Half price", "subTitle": "Today", "price": 5 });

    let (status, _) = app
        .send("POST", "/hotdeals", Some(token_for("pat@shop.com").as_str()), Some(deal.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, created) = app
        .send("POST", "/hotdeals", Some(token_for("boss@shop.com").as_str()), Some(deal))
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["insertedId"].as_str().unwrap().to_string();

    let (_, updated) = app
        .send(
            "PATCH",
            &format!("/hotdeals/{}", id),
            None,
            Some(json!({ "subTitle": "This week" })),
        )
        .await;
    assert_eq!(updated["modifiedCount"], json!(1));

    let (_, deals) = app.send("GET", "/hotdeals", None, None).await;
    assert_eq!(deals[0]["title"], json!("Half price"));
    assert_eq!(deals[0]["subTitle"], json!("This week"));

    app.cleanup().await;
}

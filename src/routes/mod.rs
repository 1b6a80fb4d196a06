mod auth;
mod billing;
mod blogs;
mod carts;
mod catalog;
mod health;
mod hot_deals;
mod orders;
mod products;
mod users;
mod wishlist;

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use crate::{
    AppState,
    middleware::{admin_middleware, auth_middleware},
};

pub fn create_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/jwt", post(auth::issue_token))
        .route(
            "/users",
            post(users::create_user).patch(users::update_profile),
        )
        .route("/categories", get(catalog::list_categories))
        .route("/products", get(products::list_products))
        .route("/products/{id}", patch(products::update_product))
        .route(
            "/products/{id}/reviews",
            get(products::list_reviews).post(products::create_review),
        )
        .route("/blogs", get(catalog::list_blogs))
        .route(
            "/blogs/{id}/comments",
            get(blogs::list_comments).post(blogs::create_comment),
        )
        .route(
            "/carts",
            get(carts::list_cart)
                .post(carts::add_to_cart)
                .delete(carts::clear_cart),
        )
        .route("/carts/{id}", delete(carts::remove_from_cart))
        .route(
            "/wishlist",
            get(wishlist::list_wishlist).post(wishlist::add_to_wishlist),
        )
        .route("/wishlist/{id}", delete(wishlist::remove_from_wishlist))
        .route("/orders", post(orders::create_order))
        .route(
            "/billing",
            get(billing::list_billing).post(billing::create_billing),
        )
        .route(
            "/billings",
            get(billing::list_billing).post(billing::create_billing),
        )
        .route("/hotdeals", get(hot_deals::list_hot_deals))
        .route("/hotdeals/{id}", patch(hot_deals::update_hot_deal));

    // The admin lookup path takes an email on GET and a user id on PATCH.
    let authenticated = Router::new()
        .route("/users/admin/{id}", get(users::admin_status))
        .route("/orders", get(orders::list_own_orders))
        .route("/orders/{id}", delete(orders::delete_order))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let admin = Router::new()
        .route("/users", get(users::list_users))
        .route("/users/admin/{id}", patch(users::make_admin))
        .route("/users/{id}", delete(users::delete_user))
        .route("/products", post(products::create_product))
        .route("/products/{id}", delete(products::delete_product))
        .route("/allorders", get(orders::list_all_orders))
        .route("/hotdeals", post(hot_deals::create_hot_deal))
        .route("/hotdeals/{id}", delete(hot_deals::delete_hot_deal))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_middleware,
        ))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(authenticated).merge(admin)
}

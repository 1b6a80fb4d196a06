pub mod billing_queries;
pub mod cart_queries;
pub mod catalog_queries;
pub mod comment_queries;
pub mod documents;
pub mod hot_deal_queries;
pub mod order_queries;
pub mod product_queries;
pub mod review_queries;
pub mod user_queries;
pub mod wishlist_queries;

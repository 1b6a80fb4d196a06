mod connection;

pub use connection::{check_health, connect};

pub const USERS: &str = "users";
pub const CATEGORIES: &str = "categories";
pub const PRODUCTS: &str = "products";
pub const REVIEWS: &str = "reviews";
pub const HOT_DEALS: &str = "hotdeals";
pub const BLOGS: &str = "blogs";
pub const COMMENTS: &str = "comments";
pub const CARTS: &str = "carts";
pub const WISHLIST: &str = "wishlist";
pub const ORDERS: &str = "orders";
pub const BILLINGS: &str = "billings";

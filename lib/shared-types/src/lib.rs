mod macros;

mod order_id;
mod product_id;
mod user_id;

pub use order_id::OrderId;
pub use product_id::ProductId;
pub use user_id::UserId;

pub mod logs;
pub mod orders;
pub mod products;

pub use logs::Entity as Logs;
pub use orders::Entity as Orders;
pub use products::Entity as Products;

pub mod orders;
pub mod results;
pub mod sku;

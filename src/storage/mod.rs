pub mod products_file;

pub use products_file::{read_products, read_products_or_default, write_products};

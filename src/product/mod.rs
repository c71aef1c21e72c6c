pub mod product;
pub mod product_id;

pub use product::{Product, ProductFields, TrackedProduct, NEVER_NOTIFY};
pub use product_id::{
    extract_product_id_from_url, is_valid_product_id, product_url, product_url_with_base,
    resolve_product_id, DEFAULT_BASE_PRODUCT_URL,
};

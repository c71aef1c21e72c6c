pub mod extract_category;
pub mod extract_data;
pub mod extract_point;
pub mod extract_price;
pub mod extract_title;
pub mod matcher;
pub mod normalize;

pub use extract_data::{extract_data, parse_page};

use std::fmt;

pub mod add_product;
pub mod check_products;
pub mod update_product;

pub use add_product::add_product;
pub use check_products::{check_products, CheckOptions, CheckReport, FailedUpdate, Notification};
pub use update_product::ProductUpdater;

/// Steps of a single product refresh. A refresh ends in `Committed` or
/// fails in one of the intermediate stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStage {
    Idle,
    Fetching,
    Parsing,
    Extracting,
    Committed,
}

impl fmt::Display for UpdateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpdateStage::Idle => "idle",
            UpdateStage::Fetching => "fetching",
            UpdateStage::Parsing => "parsing",
            UpdateStage::Extracting => "extracting",
            UpdateStage::Committed => "committed",
        };
        f.write_str(name)
    }
}

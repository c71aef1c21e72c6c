pub mod page_fetcher;

pub use page_fetcher::{FetchPage, PageFetcher, DEFAULT_USER_AGENT};

mod crawler_sequential;
mod fetcher_rest;

pub use crawler_sequential::*;
pub use fetcher_rest::*;

mod entities;
mod error;
mod request;

pub use entities::*;
pub use error::*;
pub use request::*;

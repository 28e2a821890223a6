pub mod constants_error;
pub use constants_error::*;

pub mod association;
pub use association::*;

pub mod associator;
pub use associator::*;

pub mod datasource;
pub use datasource::*;

pub mod query_constants;
pub use query_constants::*;

pub mod executor_error;
pub use executor_error::*;

pub mod execution_result;
pub use execution_result::*;

pub mod query_engine;
pub use query_engine::*;

#[cfg(test)]
pub mod scripted_engine;

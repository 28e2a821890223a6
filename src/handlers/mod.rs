pub mod envelope;
pub use envelope::*;

pub mod constants_handler;
pub use constants_handler::*;

pub mod query_hook;
pub use query_hook::*;

pub mod query_handler;
pub use query_handler::*;

pub mod databases_handler;
pub use databases_handler::*;

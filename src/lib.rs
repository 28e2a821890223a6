pub mod parser;
pub use parser::{parse_sql, ParseError};

pub mod constants;
pub use constants::{find_constants, find_datasource, replace_constants, AssociationMap, ConstantsError, QueryConstants};

pub mod config;
pub use config::ServiceConfig;

pub mod engine;

pub mod handlers;

pub mod agent;

pub mod server;

pub mod agent_error;
pub use agent_error::*;

pub mod transport;
pub use transport::*;

pub mod agent_handle;
pub use agent_handle::*;

pub mod prompt_template;
pub use prompt_template::*;

pub mod agent_engine;
pub use agent_engine::*;

mod defaults;
mod types;

pub use defaults::default_timeout_sec;
pub use types::*;

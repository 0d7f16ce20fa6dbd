//! Command handlers, one module per subcommand.

pub mod deps;
pub mod resolve;
pub mod transform;

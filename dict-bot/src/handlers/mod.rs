//! Handlers run per message, in chain order: logging, commands, lookup.

mod command_handler;
mod logging;
mod lookup_handler;

pub use command_handler::CommandHandler;
pub use logging::LoggingHandler;
pub use lookup_handler::LookupHandler;

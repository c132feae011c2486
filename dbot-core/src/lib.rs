//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], message and user types, errors,
//! and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain and the app.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
};

//! Core reply-resolution policy
//!
//! Shared by the HTTP front and the Telegram front.

mod resolver;

pub use resolver::{resolve, Exchange, History, ReplyResult};

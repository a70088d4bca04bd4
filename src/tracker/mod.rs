//! Caller-side session over the conversion and ranking core

pub mod quote_session;

pub use quote_session::QuoteSession;

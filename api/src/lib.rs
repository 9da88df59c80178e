//! This crate contains the client side of the activities HTTP API: the wire
//! types, the `ActivityApi` trait and its `reqwest` implementation.

pub mod activity;
pub mod client;
pub mod config;
mod error;
pub mod reply;

pub use activity::Activity;
pub use activity::ActivityCatalog;
pub use client::ActivityApi;
pub use client::HttpActivityApi;
pub use client::Mutation;
pub use config::ApiConfig;
pub use error::ApiError;
pub use reply::MessageReply;

//! Goodreads API integration
//!
//! Goodreads ranks search results by popularity, and tolerates keyword
//! searches ("Jonathan Strange" finds "Jonathan Strange & Mr Norrell"), so
//! it is the service we trust to turn free text into identifiers.
//!
//! API docs: https://www.goodreads.com/api

pub mod adapter;
mod client;

pub use client::{DEFAULT_BASE_URL, GoodreadsClient};

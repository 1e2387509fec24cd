//! Customer Insights - synthetic customer-behavior profiles for an analytics
//! dashboard.
//!
//! # Overview
//!
//! The server side generates a fixed catalog of customer profiles, each with
//! a randomly sampled daily history whose length follows the requested time
//! range. The client side fetches those profiles, keeps them in an explicit
//! store, filters them by a search query and derives chart series from the
//! selected profile.
//!
//! # Modules
//!
//! - [`model`]: Profile, history and persona types (the JSON contract)
//! - [`catalog`]: The fixed table of synthetic customers
//! - [`generator`]: Profile and history generation
//! - [`api`]: HTTP API handlers and router
//! - [`error`]: Request-boundary error handling
//! - [`client`]: HTTP client for the profile API
//! - [`store`]: Client-side profile state and search filter
//! - [`views`]: Chart series and summaries derived from a profile
//! - [`dashboard`]: Client composition root tying fetches to the store

pub mod api;
pub mod catalog;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod generator;
pub mod model;
pub mod store;
pub mod views;

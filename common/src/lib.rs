//! Shared storefront logic: feed parsing, product normalization, the catalog
//! store, per-card view models, image selection and the contact link builder.
//!
//! Nothing in this crate touches the DOM, so it builds for native targets
//! (tests) as well as for the browser.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod feed;
pub mod model;
pub mod selection;
pub mod view;

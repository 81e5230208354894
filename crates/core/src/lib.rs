//! ShopCommand Core - catalog types and query logic.
//!
//! This crate provides the shared pieces used by all ShopCommand components:
//! - `storefront` - Public-facing natural-language shopping site
//! - `cli` - Command-line tools for running queries against the catalog
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. The whole logic path is two pure
//! functions composed: [`intent::Intent::parse`] turns a free-text query
//! into a structured intent, and [`filter::apply`] turns that intent into a
//! filtered subsequence of the catalog.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers and domain enums (IDs, prices, categories)
//! - [`catalog`] - The static seeded product catalog
//! - [`intent`] - Free-text query to structured intent extraction
//! - [`filter`] - Intent-driven catalog filtering and sorting
//! - [`store`] - Immutable view state and pure reducers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod filter;
pub mod intent;
pub mod store;
pub mod types;

pub use types::*;

//! Core types for ShopCommand.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod color;
pub mod gender;
pub mod id;
pub mod price;
pub mod product;

pub use category::Category;
pub use gender::Gender;
pub use id::ProductId;
pub use price::Price;
pub use product::Product;

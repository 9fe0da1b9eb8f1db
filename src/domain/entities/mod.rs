//! Core domain entities representing the shop data model.
//!
//! Entities are plain data structures mapped one-to-one onto table rows.
//!
//! # Entity Types
//!
//! - [`User`] - An account; `username` and `email` are unique
//! - [`Store`] - A shop selling products
//! - [`Brand`] - A manufacturer label attached to products
//! - [`Product`] - An item sold by one store under one brand
//! - [`Payment`] - A purchase of a product by a user in a store
//! - [`Statistic`] - A tracked event involving a user, product and store
//!
//! # Design Pattern
//!
//! Each entity has a companion `NewX` struct holding every writable field.
//! The same struct is used for creation and for full-replacement updates:
//! there are no partial updates.

pub mod brand;
pub mod payment;
pub mod product;
pub mod statistic;
pub mod store;
pub mod user;

pub use brand::{Brand, NewBrand};
pub use payment::{NewPayment, Payment};
pub use product::{NewProduct, Product};
pub use statistic::{NewStatistic, Statistic};
pub use store::{NewStore, Store};
pub use user::{NewUser, User};

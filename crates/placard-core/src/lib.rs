//! Placard Core Types
//!
//! This crate provides the data model shared by the Placard item renderer:
//!
//! - **Items**: Content records with named elements ([`item::Item`])
//! - **Elements**: Access-checked, positionable fields ([`element::Element`])
//! - **Parameters**: Typed records passed to elements and templates ([`params`] module)
//! - **Users**: The acting user for access checks ([`user::User`])
//! - **Values**: Dynamic display options ([`value::Value`])

pub mod element;
pub mod item;
pub mod params;
pub mod user;
pub mod value;

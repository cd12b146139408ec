//! Core Kernel - Foundational types for the rating system
//!
//! This crate provides the building blocks shared by the domain and
//! interface crates:
//! - Money type with precise decimal arithmetic

pub mod money;

pub use money::{Money, MoneyError};

#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod fmt;
pub mod footprint;
pub mod incentives;
pub mod lenient;
pub mod lodestar;
pub mod prelude;
pub mod quantity;
pub mod range;
pub mod states;
pub mod susceptibility;
pub mod tables;

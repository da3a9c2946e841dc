//! Core value model for deep-equality assertions
//!
//! This crate provides the dynamically shaped [`Value`] that the comparator
//! works on. A value is one of four shapes: absent (nil), a scalar, an ordered
//! sequence, or a string-keyed mapping. Ordinary Rust data converts into a
//! `Value` through `From` impls, and any `serde::Serialize` type converts
//! through [`Value::from_serialize`].
//!
//! # Example
//!
//! ```
//! use deepeq_core::{Kind, Value};
//!
//! let v = Value::from(vec![1, 2, 3]);
//! assert_eq!(v.kind(), Kind::Sequence);
//! assert_eq!(v.to_string(), "[1, 2, 3]");
//!
//! let nothing: Option<i32> = None;
//! assert!(Value::from(nothing).is_absent());
//! ```

mod convert;
mod error;
mod kind;
mod value;

pub use error::{ValueError, ValueResult};
pub use kind::Kind;
pub use value::{Mapping, Scalar, Truncated, Value};

/// Printed form of an absent value
pub const NIL: &str = "nil";

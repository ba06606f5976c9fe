//! Core value and stack types.
//!
//! This module contains the data the rest of the engine operates on:
//! - [`Value`], the three-way tagged numeric storage, and its casts
//! - [`Stack`], the LIFO container the calculator mutates
//! - [`CalcError`], the shared error taxonomy

mod error;
mod stack;
mod value;

pub use error::{CalcError, ErrorKind, Result};
pub use stack::Stack;
pub use value::{
    integral_cast, negative_integral_cast, positive_integral_cast, Kind, Preference, Value,
};

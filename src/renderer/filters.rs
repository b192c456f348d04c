//! Filters registered on top of the MiniJinja builtins.
//!
//! Case conversions are handy for resource names, labels and environment
//! variable names derived from a single variable.

pub use cruet::case::{
    camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
    screaming_snake::to_screaming_snake_case, snake::to_snake_case,
    train::to_train_case,
};

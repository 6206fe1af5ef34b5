#![allow(dead_code)]

mod fixtures;
mod persistence;

pub use fixtures::*;
pub use persistence::*;

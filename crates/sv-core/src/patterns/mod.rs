//! Patterns sub-module: visitor.

pub mod visitor;

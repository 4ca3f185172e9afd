//! Utility modules

pub mod string;

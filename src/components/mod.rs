//! UI components.

pub mod contact;
pub mod sections;
pub mod starfield;
pub mod typing;

//! Wire-level types shared between the content client and its consumers.

pub mod domain;
pub mod error;
pub mod protocol;

//! Writer implementations

pub(crate) mod common;
mod desec;

pub use desec::DesecProvider;

// Concrete implementations of the domain ports.

pub mod api;
pub mod storage;

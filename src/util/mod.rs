//! Small utilities: token decoding and durable session storage.

pub mod jwt;
pub mod storage;

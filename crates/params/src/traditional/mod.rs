//! Constants for traditional (pre-quantum) elliptic curve cryptography

pub mod edwards;

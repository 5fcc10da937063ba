// Cryptographic randomness

pub mod random;

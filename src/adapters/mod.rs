// Adapters layer: concrete implementations of the domain ports.

pub mod numbers_api;

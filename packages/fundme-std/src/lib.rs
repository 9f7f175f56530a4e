pub mod common;
pub mod error;
pub mod ownership;

#[cfg(all(not(target_arch = "wasm32"), feature = "deploy"))]
pub mod deploy;

#[cfg(not(target_arch = "wasm32"))]
pub mod mock;
#[cfg(not(target_arch = "wasm32"))]
pub mod mock_contract;

#[cfg(not(target_arch = "wasm32"))]
pub use mock::{init_balances, mock_app, MockApp};
#[cfg(not(target_arch = "wasm32"))]
pub use mock_contract::MockContract;

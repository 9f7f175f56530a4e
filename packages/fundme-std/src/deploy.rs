/// Declares the cw-orch interface `$contract_name` for the contract crate it is
/// invoked in.
///
/// The calling module must have `InstantiateMsg`, `ExecuteMsg`, `QueryMsg` and
/// `MigrateMsg` in scope. Mock chains run the crate's `contract` entry points,
/// real chains upload `$wasm_path` from the workspace `artifacts/` directory.
#[macro_export]
macro_rules! contract_interface {
    ($contract_name:ident, $contract_id:expr, $wasm_path:expr) => {
        use cw_orch::prelude::*;

        #[cw_orch::interface(InstantiateMsg, ExecuteMsg, QueryMsg, MigrateMsg, id = $contract_id)]
        pub struct $contract_name;

        impl<Chain> Uploadable for $contract_name<Chain> {
            fn wrapper() -> Box<dyn MockContract<Empty>> {
                let contract = ContractWrapper::new_with_empty(
                    crate::contract::execute,
                    crate::contract::instantiate,
                    crate::contract::query,
                )
                .with_migrate(crate::contract::migrate);
                Box::new(contract)
            }

            fn wasm(_chain: &ChainInfoOwned) -> WasmPath {
                // Panics when the wasm was not built into artifacts/
                artifacts_dir_from_workspace!()
                    .find_wasm_path($wasm_path)
                    .unwrap()
            }
        }
    };
}

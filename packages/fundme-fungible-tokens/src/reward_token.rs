use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::{
    AllAccountsResponse, AllAllowancesResponse, AllowanceResponse, BalanceResponse, Cw20Coin,
    DownloadLogoResponse, Logo, MarketingInfoResponse, MinterResponse, TokenInfoResponse,
};
use cw20_base::msg::{
    ExecuteMsg as Cw20ExecuteMsg, InstantiateMarketingInfo, InstantiateMsg as Cw20InstantiateMsg,
    QueryMsg as Cw20QueryMsg,
};
use cw_utils::Expiration;

pub const REWARD_TOKEN_NAME: &str = "RewardToken";
pub const REWARD_TOKEN_SYMBOL: &str = "RWT";

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    pub mint: Option<MinterResponse>,
    pub marketing: Option<InstantiateMarketingInfo>,
}

impl From<InstantiateMsg> for Cw20InstantiateMsg {
    fn from(msg: InstantiateMsg) -> Self {
        Cw20InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            initial_balances: msg.initial_balances,
            mint: msg.mint,
            marketing: msg.marketing,
        }
    }
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Transfer is a base message to move tokens to another account without triggering actions
    Transfer { recipient: String, amount: Uint128 },
    /// Burn is a base message to destroy tokens forever
    Burn { amount: Uint128 },
    /// Send is a base message to transfer tokens to a contract and trigger an action
    /// on the receiving contract.
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    /// Allows spender to access an additional amount tokens from the owner's account.
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    /// Lowers the spender's access of tokens from the owner's account by amount.
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    /// Transfers amount tokens from owner -> recipient if the sender has sufficient pre-approval.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Sends amount tokens from owner -> contract if the sender has sufficient pre-approval.
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    /// Destroys tokens forever
    BurnFrom { owner: String, amount: Uint128 },
    /// If authorized, creates amount new tokens and adds to the recipient balance.
    Mint { recipient: String, amount: Uint128 },
    /// If authorized, updates marketing metadata.
    UpdateMarketing {
        project: Option<String>,
        description: Option<String>,
        marketing: Option<String>,
    },
    /// If set as the "marketing" role on the contract, upload a new URL, SVG, or PNG for the token
    UploadLogo(Logo),
}

impl From<ExecuteMsg> for Cw20ExecuteMsg {
    fn from(msg: ExecuteMsg) -> Self {
        match msg {
            ExecuteMsg::Transfer { recipient, amount } => {
                Cw20ExecuteMsg::Transfer { recipient, amount }
            }
            ExecuteMsg::Burn { amount } => Cw20ExecuteMsg::Burn { amount },
            ExecuteMsg::Send {
                contract,
                amount,
                msg,
            } => Cw20ExecuteMsg::Send {
                contract,
                amount,
                msg,
            },
            ExecuteMsg::IncreaseAllowance {
                spender,
                amount,
                expires,
            } => Cw20ExecuteMsg::IncreaseAllowance {
                spender,
                amount,
                expires,
            },
            ExecuteMsg::DecreaseAllowance {
                spender,
                amount,
                expires,
            } => Cw20ExecuteMsg::DecreaseAllowance {
                spender,
                amount,
                expires,
            },
            ExecuteMsg::TransferFrom {
                owner,
                recipient,
                amount,
            } => Cw20ExecuteMsg::TransferFrom {
                owner,
                recipient,
                amount,
            },
            ExecuteMsg::SendFrom {
                owner,
                contract,
                amount,
                msg,
            } => Cw20ExecuteMsg::SendFrom {
                owner,
                contract,
                amount,
                msg,
            },
            ExecuteMsg::BurnFrom { owner, amount } => Cw20ExecuteMsg::BurnFrom { owner, amount },
            ExecuteMsg::Mint { recipient, amount } => Cw20ExecuteMsg::Mint { recipient, amount },
            ExecuteMsg::UpdateMarketing {
                project,
                description,
                marketing,
            } => Cw20ExecuteMsg::UpdateMarketing {
                project,
                description,
                marketing,
            },
            ExecuteMsg::UploadLogo(logo) => Cw20ExecuteMsg::UploadLogo(logo),
        }
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the current balance of the given address, 0 if unset.
    #[returns(BalanceResponse)]
    Balance { address: String },
    /// Returns metadata on the contract - name, decimals, supply, etc.
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    /// Returns who can mint and the hard cap on maximum tokens after minting.
    #[returns(Option<MinterResponse>)]
    Minter {},
    /// Returns how much spender can use from owner account, 0 if unset.
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    /// Returns all allowances this owner has approved. Supports pagination.
    #[returns(AllAllowancesResponse)]
    AllAllowances {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Returns all accounts that have balances. Supports pagination.
    #[returns(AllAccountsResponse)]
    AllAccounts {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(MarketingInfoResponse)]
    MarketingInfo {},
    /// Errors if no logo data is stored for this contract.
    #[returns(DownloadLogoResponse)]
    DownloadLogo {},
}

impl From<QueryMsg> for Cw20QueryMsg {
    fn from(msg: QueryMsg) -> Self {
        match msg {
            QueryMsg::Balance { address } => Cw20QueryMsg::Balance { address },
            QueryMsg::TokenInfo {} => Cw20QueryMsg::TokenInfo {},
            QueryMsg::Minter {} => Cw20QueryMsg::Minter {},
            QueryMsg::Allowance { owner, spender } => Cw20QueryMsg::Allowance { owner, spender },
            QueryMsg::AllAllowances {
                owner,
                start_after,
                limit,
            } => Cw20QueryMsg::AllAllowances {
                owner,
                start_after,
                limit,
            },
            QueryMsg::AllAccounts { start_after, limit } => {
                Cw20QueryMsg::AllAccounts { start_after, limit }
            }
            QueryMsg::MarketingInfo {} => Cw20QueryMsg::MarketingInfo {},
            QueryMsg::DownloadLogo {} => Cw20QueryMsg::DownloadLogo {},
        }
    }
}

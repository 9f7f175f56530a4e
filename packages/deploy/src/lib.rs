pub mod artifacts;
pub mod chains;
pub mod charge;
pub mod error;
pub mod fund_me;
pub mod report;

pub mod fund_me;
pub mod price_feed;

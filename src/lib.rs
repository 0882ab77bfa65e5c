//! Stake-split recommender for two-way events: arbitrage detection and
//! allocation when a surebet exists, hedged integer-stake splits otherwise.

pub mod config;
pub mod recommender;
pub mod strategies;

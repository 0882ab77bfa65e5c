pub mod arbitrage;
pub mod hedge;
pub mod types;

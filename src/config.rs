use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub limits: LimitsConfig,
    pub bet: BetConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    pub min_odds: f64,
    pub min_capital: f64,
    // Caps the hedge solver's linear stake scan.
    pub max_capital: f64,
    pub min_target_pct: f64,
    pub max_target_pct: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BetConfig {
    pub odds_outcome1: f64,
    pub odds_outcome2: f64,
    pub capital: f64,
    pub target_profit_pct: f64,
    pub predicted_outcome: String, // "1" or "2"
    pub outcome1_label: String,
    pub outcome2_label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub json: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let limits = LimitsConfig {
            min_odds: env::var("MIN_ODDS")
                .unwrap_or_else(|_| "1.01".to_string())
                .parse()
                .unwrap_or(1.01),
            min_capital: env::var("MIN_CAPITAL")
                .unwrap_or_else(|_| "10.0".to_string())
                .parse()
                .unwrap_or(10.0),
            max_capital: env::var("MAX_CAPITAL")
                .unwrap_or_else(|_| "10000000.0".to_string())
                .parse()
                .unwrap_or(10_000_000.0),
            min_target_pct: env::var("MIN_TARGET_PCT")
                .unwrap_or_else(|_| "1.0".to_string())
                .parse()
                .unwrap_or(1.0),
            max_target_pct: env::var("MAX_TARGET_PCT")
                .unwrap_or_else(|_| "200.0".to_string())
                .parse()
                .unwrap_or(200.0),
        };

        let bet = BetConfig {
            odds_outcome1: env::var("ODDS_OUTCOME1")
                .unwrap_or_else(|_| "2.10".to_string())
                .parse()
                .unwrap_or(2.10),
            odds_outcome2: env::var("ODDS_OUTCOME2")
                .unwrap_or_else(|_| "2.05".to_string())
                .parse()
                .unwrap_or(2.05),
            capital: env::var("CAPITAL")
                .unwrap_or_else(|_| "1000.0".to_string())
                .parse()
                .unwrap_or(1000.0),
            target_profit_pct: env::var("TARGET_PROFIT_PCT")
                .unwrap_or_else(|_| "10.0".to_string())
                .parse()
                .unwrap_or(10.0),
            predicted_outcome: env::var("PREDICTED_OUTCOME")
                .unwrap_or_else(|_| "1".to_string()),
            outcome1_label: env::var("OUTCOME1_LABEL")
                .unwrap_or_else(|_| "India".to_string()),
            outcome2_label: env::var("OUTCOME2_LABEL")
                .unwrap_or_else(|_| "Australia".to_string()),
        };

        let output = OutputConfig {
            json: env::var("OUTPUT_JSON")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        };

        Ok(Config {
            limits,
            bet,
            output,
        })
    }
}

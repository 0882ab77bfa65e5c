use serde::{Deserialize, Serialize};

/// One side of a two-way event. Which side is "outcome 1" is caller-assigned
/// and carries through to every output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Outcome1,
    Outcome2,
}

impl Outcome {
    pub fn other(&self) -> Outcome {
        match self {
            Outcome::Outcome1 => Outcome::Outcome2,
            Outcome::Outcome2 => Outcome::Outcome1,
        }
    }
}

/// Decimal odds for both sides of a binary event. Both must be > 1.0; the
/// recommender boundary enforces that, the strategies assume it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OddsPair {
    pub outcome1: f64,
    pub outcome2: f64,
}

impl OddsPair {
    pub fn new(outcome1: f64, outcome2: f64) -> Self {
        Self { outcome1, outcome2 }
    }

    pub fn odds_for(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Outcome1 => self.outcome1,
            Outcome::Outcome2 => self.outcome2,
        }
    }

    /// Implied probability sum 1/o1 + 1/o2, computed on the raw odds.
    pub fn implied_sum(&self) -> f64 {
        1.0 / self.outcome1 + 1.0 / self.outcome2
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArbitrageVerdict {
    pub exists: bool,
    pub implied_probability_sum: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrageAllocation {
    pub stake_outcome1: f64,
    pub stake_outcome2: f64,
    pub total_invested: f64,
    pub guaranteed_return: f64,
    pub profit: f64,
    pub profit_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HedgeAllocation {
    pub predicted: Outcome,
    pub stake_on_predicted: f64,
    pub stake_on_other: f64,
    pub return_if_correct: f64,
    pub return_if_wrong: f64,
    pub net_profit_if_correct: f64,
    pub used_fallback: bool,
}

/// Minimal single-sided stake reaching the target return, leaving the rest
/// of the bankroll unstaked. Not risk-free: pays only if the prediction
/// holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleBet {
    pub stake: f64,
    pub potential_return: f64,
    pub profit_if_correct: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BetRequest {
    pub odds: OddsPair,
    pub capital: f64,
    pub target_profit_pct: f64,
    pub predicted: Outcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StakePlan {
    Arbitrage(ArbitrageAllocation),
    Hedge(HedgeAllocation),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub verdict: ArbitrageVerdict,
    pub plan: StakePlan,
    /// Single-sided alternative, present on the hedge path only.
    pub single_sided: Option<SingleBet>,
}

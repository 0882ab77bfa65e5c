use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::LimitsConfig;
use crate::strategies::arbitrage::{AllocationTarget, ArbitrageEvaluator};
use crate::strategies::hedge::HedgeStakeSolver;
use crate::strategies::types::{BetRequest, Recommendation, StakePlan};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("odds for {side} must be at least {min:.2} (got {value:.2})")]
    OddsTooLow {
        side: &'static str,
        value: f64,
        min: f64,
    },
    #[error("capital {value:.2} outside allowed range [{min:.2}, {max:.2}]")]
    CapitalOutOfRange { value: f64, min: f64, max: f64 },
    #[error("target profit {value:.2}% outside allowed range [{min:.2}, {max:.2}]")]
    TargetPercentOutOfRange { value: f64, min: f64, max: f64 },
}

pub struct Recommender {
    limits: LimitsConfig,
}

impl Recommender {
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Arbitrage first; hedge split on the predicted winner otherwise.
    /// Stateless across calls: the predicted outcome arrives with every
    /// request.
    pub fn recommend(&self, request: &BetRequest) -> Result<Recommendation, RequestError> {
        self.validate(request)?;

        let verdict = ArbitrageEvaluator::evaluate(&request.odds);
        let target_total = request.capital * (1.0 + request.target_profit_pct / 100.0);

        if let Some(allocation) = ArbitrageEvaluator::allocate(
            &request.odds,
            AllocationTarget::TargetReturn(target_total),
        ) {
            info!(
                "✅ Arbitrage found (implied sum {:.4}): invest {:.2} for guaranteed {:.2}",
                verdict.implied_probability_sum,
                allocation.total_invested,
                allocation.guaranteed_return
            );
            return Ok(Recommendation {
                verdict,
                plan: StakePlan::Arbitrage(allocation),
                single_sided: None,
            });
        }

        debug!(
            "Implied probability sum {:.4} >= 1, hedging on the predicted winner",
            verdict.implied_probability_sum
        );

        let predicted_odds = request.odds.odds_for(request.predicted);
        let other_odds = request.odds.odds_for(request.predicted.other());

        let allocation = HedgeStakeSolver::solve(
            request.predicted,
            predicted_odds,
            other_odds,
            request.capital,
            request.target_profit_pct,
        );
        let single_sided =
            HedgeStakeSolver::single_sided(predicted_odds, request.capital, request.target_profit_pct);

        info!(
            "🎯 Hedge split: {:.2} on predicted @ {:.2}, {:.2} on the other side",
            allocation.stake_on_predicted, predicted_odds, allocation.stake_on_other
        );

        Ok(Recommendation {
            verdict,
            plan: StakePlan::Hedge(allocation),
            single_sided: Some(single_sided),
        })
    }

    fn validate(&self, request: &BetRequest) -> Result<(), RequestError> {
        let sides = [
            ("outcome 1", request.odds.outcome1),
            ("outcome 2", request.odds.outcome2),
        ];
        for (side, value) in sides {
            // Odds at or below 1.0 would mean betting with no possible
            // payout gain; they also break the implied-probability math.
            if value <= 1.0 || value < self.limits.min_odds {
                warn!("🚫 Rejecting request: {} odds {:.2} below minimum", side, value);
                return Err(RequestError::OddsTooLow {
                    side,
                    value,
                    min: self.limits.min_odds,
                });
            }
        }

        if request.capital < self.limits.min_capital || request.capital > self.limits.max_capital {
            warn!("🚫 Rejecting request: capital {:.2} out of range", request.capital);
            return Err(RequestError::CapitalOutOfRange {
                value: request.capital,
                min: self.limits.min_capital,
                max: self.limits.max_capital,
            });
        }

        if request.target_profit_pct < self.limits.min_target_pct
            || request.target_profit_pct > self.limits.max_target_pct
        {
            warn!(
                "🚫 Rejecting request: target profit {:.2}% out of range",
                request.target_profit_pct
            );
            return Err(RequestError::TargetPercentOutOfRange {
                value: request.target_profit_pct,
                min: self.limits.min_target_pct,
                max: self.limits.max_target_pct,
            });
        }

        Ok(())
    }
}

use crate::strategies::types::{ArbitrageAllocation, ArbitrageVerdict, OddsPair};

/// What amount the proportional split is solved for.
#[derive(Debug, Clone, Copy)]
pub enum AllocationTarget {
    /// Reach this total return if either outcome occurs.
    TargetReturn(f64),
    /// Split exactly this capital across both outcomes.
    Capital(f64),
}

pub struct ArbitrageEvaluator;

impl ArbitrageEvaluator {
    /// Check whether a risk-free split exists.
    /// Surebet condition: 1/odds1 + 1/odds2 < 1, strict. A sum of exactly 1
    /// carries no edge over not betting, so it does not count.
    pub fn evaluate(odds: &OddsPair) -> ArbitrageVerdict {
        let sum = odds.implied_sum();
        ArbitrageVerdict {
            exists: sum < 1.0,
            implied_probability_sum: sum,
        }
    }

    /// Proportional-stake allocation. Each outcome is staked in the ratio of
    /// its implied probability, which equalizes stake * odds across both
    /// sides. Returns None when no arbitrage exists.
    pub fn allocate(odds: &OddsPair, target: AllocationTarget) -> Option<ArbitrageAllocation> {
        let p1 = 1.0 / odds.outcome1;
        let p2 = 1.0 / odds.outcome2;
        let total = p1 + p2;

        if total >= 1.0 {
            return None;
        }

        let amount = match target {
            AllocationTarget::TargetReturn(t) => t,
            AllocationTarget::Capital(c) => c,
        };
        let stake1 = amount * p1 / total;
        let stake2 = amount * p2 / total;

        let allocation = match target {
            AllocationTarget::TargetReturn(t) => {
                let invested = stake1 + stake2;
                let profit = t - invested;
                ArbitrageAllocation {
                    stake_outcome1: stake1,
                    stake_outcome2: stake2,
                    total_invested: invested,
                    guaranteed_return: t,
                    profit,
                    profit_percent: profit / invested * 100.0,
                }
            }
            AllocationTarget::Capital(c) => {
                // Historic capital-split form: stake1 = c / (1 + o1/o2).
                // The proportional formula above is the same split.
                let guaranteed = (stake1 * odds.outcome1).min(stake2 * odds.outcome2);
                let profit = guaranteed - c;
                ArbitrageAllocation {
                    stake_outcome1: stake1,
                    stake_outcome2: stake2,
                    total_invested: c,
                    guaranteed_return: guaranteed,
                    profit,
                    profit_percent: profit / c * 100.0,
                }
            }
        };

        Some(allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_detection_rule() {
        // 1/2.10 + 1/2.05 ≈ 0.964 < 1
        let verdict = ArbitrageEvaluator::evaluate(&OddsPair::new(2.10, 2.05));
        assert!(verdict.exists);
        assert!((verdict.implied_probability_sum - (1.0 / 2.10 + 1.0 / 2.05)).abs() < EPS);

        // 1/1.50 + 1/1.50 ≈ 1.333 >= 1
        let verdict = ArbitrageEvaluator::evaluate(&OddsPair::new(1.50, 1.50));
        assert!(!verdict.exists);
    }

    #[test]
    fn test_boundary_sum_is_not_arbitrage() {
        // 1/2 + 1/2 == 1 exactly
        let odds = OddsPair::new(2.0, 2.0);
        assert!(!ArbitrageEvaluator::evaluate(&odds).exists);
        assert!(ArbitrageEvaluator::allocate(&odds, AllocationTarget::TargetReturn(1000.0)).is_none());
    }

    #[test]
    fn test_equal_payout_across_outcomes() {
        let odds = OddsPair::new(2.10, 2.05);

        let alloc = ArbitrageEvaluator::allocate(&odds, AllocationTarget::TargetReturn(1100.0))
            .expect("arbitrage exists");
        let payout1 = alloc.stake_outcome1 * odds.outcome1;
        let payout2 = alloc.stake_outcome2 * odds.outcome2;
        assert!((payout1 - payout2).abs() < 1e-6);

        let alloc = ArbitrageEvaluator::allocate(&odds, AllocationTarget::Capital(1000.0))
            .expect("arbitrage exists");
        let payout1 = alloc.stake_outcome1 * odds.outcome1;
        let payout2 = alloc.stake_outcome2 * odds.outcome2;
        assert!((payout1 - payout2).abs() < 1e-6);
    }

    #[test]
    fn test_capital_split_matches_historic_form() {
        let odds = OddsPair::new(2.30, 2.40);
        let capital = 500.0;
        let alloc = ArbitrageEvaluator::allocate(&odds, AllocationTarget::Capital(capital))
            .expect("arbitrage exists");

        let stake1 = capital / (1.0 + odds.outcome1 / odds.outcome2);
        assert!((alloc.stake_outcome1 - stake1).abs() < EPS);
        assert!((alloc.stake_outcome2 - (capital - stake1)).abs() < EPS);
        assert!(alloc.profit > 0.0);
    }
}

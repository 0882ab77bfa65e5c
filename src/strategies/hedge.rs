use tracing::warn;

use crate::strategies::types::{HedgeAllocation, Outcome, SingleBet};

/// Share of capital placed on the predicted side when no whole-unit stake
/// can reach the target return. Fixed heuristic, not derived from the odds.
const FALLBACK_PREDICTED_RATIO: f64 = 0.7;

pub struct HedgeStakeSolver;

impl HedgeStakeSolver {
    /// Find the smallest whole-unit stake on the predicted outcome whose
    /// payout reaches the target return, staking the remainder on the other
    /// side. The whole bankroll is always committed:
    /// stake_on_predicted + stake_on_other == capital.
    pub fn solve(
        predicted: Outcome,
        predicted_odds: f64,
        other_odds: f64,
        capital: f64,
        target_profit_pct: f64,
    ) -> HedgeAllocation {
        let target_return = capital * (1.0 + target_profit_pct / 100.0);
        let max_stake = capital.floor() as u64;

        let mut chosen = None;
        for b in 0..=max_stake {
            let stake = b as f64;
            if stake * predicted_odds >= target_return {
                chosen = Some(stake);
                break;
            }
        }

        let (stake_on_predicted, used_fallback) = match chosen {
            Some(stake) => (stake, false),
            None => {
                // Even the full bankroll on the predicted side falls short
                // of the target at these odds.
                warn!(
                    "⚠️ Target return {:.2} unreachable at odds {:.2}; using 70/30 fallback split",
                    target_return, predicted_odds
                );
                ((capital * FALLBACK_PREDICTED_RATIO).floor(), true)
            }
        };

        let stake_on_other = capital - stake_on_predicted;
        let return_if_correct = stake_on_predicted * predicted_odds;

        HedgeAllocation {
            predicted,
            stake_on_predicted,
            stake_on_other,
            return_if_correct,
            return_if_wrong: stake_on_other * other_odds,
            net_profit_if_correct: return_if_correct - capital,
            used_fallback,
        }
    }

    /// Single-sided alternative: the exact stake whose payout equals the
    /// target return, with the rest of the bankroll left unstaked.
    pub fn single_sided(predicted_odds: f64, capital: f64, target_profit_pct: f64) -> SingleBet {
        let target_return = capital * (1.0 + target_profit_pct / 100.0);
        let stake = target_return / predicted_odds;

        SingleBet {
            stake,
            potential_return: stake * predicted_odds,
            profit_if_correct: target_return - stake,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smallest_qualifying_stake() {
        // target = 110; 92 * 1.20 = 110.4 is the first payout >= 110
        let alloc = HedgeStakeSolver::solve(Outcome::Outcome1, 1.20, 4.00, 100.0, 10.0);
        assert_eq!(alloc.stake_on_predicted, 92.0);
        assert_eq!(alloc.stake_on_other, 8.0);
        assert!(!alloc.used_fallback);
        assert!((alloc.return_if_correct - 110.4).abs() < 1e-9);
        assert!((alloc.return_if_wrong - 32.0).abs() < 1e-9);
        assert!((alloc.net_profit_if_correct - 10.4).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_split() {
        // target = 150; even 100 * 1.05 = 105 falls short
        let alloc = HedgeStakeSolver::solve(Outcome::Outcome2, 1.05, 4.00, 100.0, 50.0);
        assert!(alloc.used_fallback);
        assert_eq!(alloc.stake_on_predicted, 70.0);
        assert_eq!(alloc.stake_on_other, 30.0);
    }

    #[test]
    fn test_full_capital_commitment() {
        for capital in [100.0, 250.5, 3333.0] {
            let alloc = HedgeStakeSolver::solve(Outcome::Outcome1, 1.80, 2.20, capital, 20.0);
            assert!((alloc.stake_on_predicted + alloc.stake_on_other - capital).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_sided_bet() {
        // target = 110 at odds 2.0 -> stake 55, payout exactly the target
        let bet = HedgeStakeSolver::single_sided(2.0, 100.0, 10.0);
        assert!((bet.stake - 55.0).abs() < 1e-9);
        assert!((bet.potential_return - 110.0).abs() < 1e-9);
        assert!((bet.profit_if_correct - 55.0).abs() < 1e-9);
    }
}

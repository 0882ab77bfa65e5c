use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use surebet_recommender::config::Config;
use surebet_recommender::recommender::Recommender;
use surebet_recommender::strategies::types::{
    BetRequest, OddsPair, Outcome, Recommendation, StakePlan,
};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "surebet_recommender=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    print_banner(&config);

    let predicted = match config.bet.predicted_outcome.trim() {
        "2" => Outcome::Outcome2,
        _ => Outcome::Outcome1,
    };
    let request = BetRequest {
        odds: OddsPair::new(config.bet.odds_outcome1, config.bet.odds_outcome2),
        capital: config.bet.capital,
        target_profit_pct: config.bet.target_profit_pct,
        predicted,
    };

    let recommender = Recommender::new(config.limits.clone());
    let recommendation = recommender.recommend(&request)?;

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        print_report(&config, &request, &recommendation);
    }

    Ok(())
}

fn print_banner(config: &Config) {
    println!("\n╔═══════════════════════════════════════════════════════════╗");
    println!("║              Surebet / Hedge Stake Recommender            ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!(
        "🏏 Match: {} vs {}",
        config.bet.outcome1_label, config.bet.outcome2_label
    );
    println!(
        "📊 Odds: {:.2} / {:.2}",
        config.bet.odds_outcome1, config.bet.odds_outcome2
    );
    println!("💰 Capital: {:.2}", config.bet.capital);
    println!("📈 Target Profit: {:.1}%", config.bet.target_profit_pct);
    println!();
}

fn print_report(config: &Config, request: &BetRequest, recommendation: &Recommendation) {
    let label_for = |outcome: Outcome| match outcome {
        Outcome::Outcome1 => config.bet.outcome1_label.as_str(),
        Outcome::Outcome2 => config.bet.outcome2_label.as_str(),
    };

    println!(
        "Implied probability sum: {:.4}",
        recommendation.verdict.implied_probability_sum
    );
    println!();

    match &recommendation.plan {
        StakePlan::Arbitrage(alloc) => {
            println!("✅ Arbitrage Found! Guaranteed Profit Possible.");
            println!(
                "💸 Bet {:.2} on {} at {:.2}",
                alloc.stake_outcome1,
                label_for(Outcome::Outcome1),
                request.odds.outcome1
            );
            println!(
                "💸 Bet {:.2} on {} at {:.2}",
                alloc.stake_outcome2,
                label_for(Outcome::Outcome2),
                request.odds.outcome2
            );
            println!("───────────────────────────────────────────────");
            println!("Total Invested: {:.2}", alloc.total_invested);
            println!("Guaranteed Return: {:.2}", alloc.guaranteed_return);
            println!(
                "Profit: {:.2} ({:.2}%)",
                alloc.profit, alloc.profit_percent
            );
        }
        StakePlan::Hedge(alloc) => {
            println!("⚠️ No arbitrage with these odds.");
            println!("Hedged split on your predicted winner:");
            println!(
                "💸 Bet {:.2} on {} at {:.2}",
                alloc.stake_on_predicted,
                label_for(alloc.predicted),
                request.odds.odds_for(alloc.predicted)
            );
            println!(
                "💸 Bet {:.2} on {} at {:.2}",
                alloc.stake_on_other,
                label_for(alloc.predicted.other()),
                request.odds.odds_for(alloc.predicted.other())
            );
            println!("───────────────────────────────────────────────");
            println!("Return if correct: {:.2}", alloc.return_if_correct);
            println!("Return if wrong: {:.2}", alloc.return_if_wrong);
            println!(
                "Net profit if correct: {:.2}",
                alloc.net_profit_if_correct
            );
            if alloc.used_fallback {
                println!("⚠️ Target return unreachable at these odds; fixed 70/30 split applied.");
            }
        }
    }

    if let Some(bet) = &recommendation.single_sided {
        println!();
        println!("Single-sided alternative (not risk-free):");
        println!(
            "💸 Bet {:.2} on {} | potential return {:.2} | profit if correct {:.2}",
            bet.stake,
            label_for(request.predicted),
            bet.potential_return,
            bet.profit_if_correct
        );
    }
    println!();
}

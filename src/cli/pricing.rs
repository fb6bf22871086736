//! CLI command: `tokenmeter pricing`
//!
//! Lists the configured models with their per-1K-token rates.

use crate::context::MetricsContext;
use tokenmeter_metrics::PricingTable;

/// Run the pricing subcommand.
pub fn run(context: &MetricsContext, json: bool) -> anyhow::Result<()> {
    let pricing = context.tracker.pricing();
    if json {
        println!("{}", serde_json::to_string_pretty(&pricing_json(pricing))?);
    } else {
        print_table(pricing);
    }
    Ok(())
}

fn pricing_json(pricing: &PricingTable) -> serde_json::Value {
    let rates: serde_json::Map<String, serde_json::Value> = pricing
        .entries()
        .into_iter()
        .map(|p| {
            (
                p.model.clone(),
                serde_json::json!({
                    "input": p.input_per_1k,
                    "output": p.output_per_1k,
                }),
            )
        })
        .collect();

    serde_json::json!({
        "available_models": pricing.models(),
        "pricing_per_1k_tokens": rates,
        "note": "Prices are estimates in USD; models not listed are priced at zero.",
    })
}

fn print_table(pricing: &PricingTable) {
    println!();
    println!("  Model Pricing (USD per 1K tokens)");
    println!("  {}", "-".repeat(56));
    println!("  {:<28} {:>12} {:>12}", "Model", "Input", "Output");
    println!("  {}", "-".repeat(56));

    if pricing.is_empty() {
        println!("  (no models configured)");
    } else {
        for entry in pricing.entries() {
            println!(
                "  {:<28} {:>12.6} {:>12.6}",
                entry.model, entry.input_per_1k, entry.output_per_1k
            );
        }
    }
    println!();
}

//! CLI command: `tokenmeter estimate`

use crate::context::MetricsContext;
use tracing::warn;

/// Run the estimate subcommand.
pub fn run(
    context: &MetricsContext,
    model: &str,
    input_tokens: u64,
    output_tokens: u64,
) -> anyhow::Result<()> {
    if !context.tracker.pricing().contains(model) {
        warn!(model, "Model has no configured pricing; estimate is zero");
    }

    let cost = context.tracker.price(model, input_tokens, output_tokens);
    println!(
        "{}: {} input + {} output tokens = ${:.6}",
        model, input_tokens, output_tokens, cost
    );
    Ok(())
}

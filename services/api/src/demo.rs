use crate::infra::{default_analysis_service, parse_threshold};
use clap::Args;
use trust_aware::analysis::{AnalyzeRequest, AnalyzeResponse};
use trust_aware::config::AppConfig;
use trust_aware::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Text to classify and assess
    pub(crate) text: String,
    /// Confidence threshold in [0, 1] (defaults to the configured value)
    #[arg(long, value_parser = parse_threshold)]
    pub(crate) confidence_threshold: Option<f64>,
    /// Print the raw JSON response instead of the readable report
    #[arg(long)]
    pub(crate) json: bool,
}

const DEMO_TEXTS: &[&str] = &[
    "I absolutely love this product, it works perfectly and I would recommend it to everyone.",
    "The product quality is great, but the customer service was awful.",
    "The experience was kind of okay.",
    "Is this worth the price? I'm not sure.",
    "Terrible packaging, the box arrived crushed and the charger was broken.",
];

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        text,
        confidence_threshold,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = default_analysis_service(config.policy.analysis_settings());
    let response = service.analyze(AnalyzeRequest {
        text,
        confidence_threshold,
    })?;

    if json {
        let rendered = serde_json::to_string_pretty(&response).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_analysis(&response);
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = default_analysis_service(config.policy.analysis_settings());

    println!("Trust-aware decision demo");
    println!(
        "Model: {} | default confidence threshold {:.2}",
        service.model_name(),
        service.settings().default_confidence_threshold
    );

    let mut deferred = 0;
    for (index, text) in DEMO_TEXTS.iter().enumerate() {
        println!("\nCase {}: \"{}\"", index + 1, text);
        let response = service.analyze(AnalyzeRequest {
            text: text.to_string(),
            confidence_threshold: None,
        })?;
        if response.decision.is_deferred() {
            deferred += 1;
        }
        render_analysis(&response);
    }

    println!(
        "\n{} of {} cases routed to human review",
        deferred,
        DEMO_TEXTS.len()
    );
    Ok(())
}

fn render_analysis(response: &AnalyzeResponse) {
    println!(
        "- Prediction: {} (confidence {:.2}, margin {:.2})",
        response.label, response.confidence, response.margin
    );
    println!(
        "- Decision: {} (risk score {})",
        response.decision, response.risk_score
    );

    if response.risk_signals.is_empty() {
        println!("- Risk signals: none");
    } else {
        let names: Vec<&str> = response
            .risk_signals
            .iter()
            .map(|signal| signal.as_str())
            .collect();
        println!("- Risk signals: {}", names.join(", "));
    }

    println!("- Scores:");
    for (label, probability) in &response.scores {
        println!("  - {}: {:.3}", label, probability);
    }
    println!("- Explanation: {}", response.explanation);
}

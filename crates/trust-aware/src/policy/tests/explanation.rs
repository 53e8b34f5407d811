use super::common::*;
use crate::policy::{assess, explain, DecisionConfig, DecisionEngine, RiskSignal};

#[test]
fn accepted_explanation_states_prediction_and_safety() {
    let result = binary("POSITIVE", 0.9);
    let config = DecisionConfig::default();
    let assessment = assess(&result, CONFIDENT_TEXT, &config).expect("assessment succeeds");

    let text = explain(&result, &assessment, &config);

    assert!(text.starts_with("The system predicted POSITIVE with confidence 0.90"));
    assert!(text.contains("margin between the top two labels is 0.80"));
    assert!(text.contains("No risk factors were detected"));
    assert!(text.contains("automation is considered safe"));
    assert!(!text.contains("human review"));
}

#[test]
fn deferred_explanation_lists_signals_and_rationale() {
    let result = binary("POSITIVE", 0.97);
    let config = DecisionConfig::default();
    let assessment = assess(&result, CONTRASTIVE_TEXT, &config).expect("assessment succeeds");

    let text = explain(&result, &assessment, &config);

    assert!(text.contains("the text contains contrastive phrasing"));
    assert!(text.contains("the text shows mixed or conflicting sentiment cues"));
    assert!(text.contains("risk score of 2 meets the review threshold of 2"));
    assert!(text.contains(
        "the system prefers deferring to a human over risking a confidently wrong automated decision"
    ));
    assert!(!text.contains("No risk factors"));
}

#[test]
fn clauses_follow_signal_order() {
    let result = binary("NEGATIVE", 0.52);
    let config = DecisionConfig::default();
    let assessment =
        assess(&result, "Maybe it works, but who knows?", &config).expect("assessment succeeds");
    assert_eq!(assessment.risk_signals, RiskSignal::ALL.to_vec());

    let text = explain(&result, &assessment, &config);

    let positions: Vec<usize> = [
        "confidence is below the configured threshold",
        "the score margin between the top two labels is narrow",
        "the text contains hedging, a question, and contrastive phrasing",
        "the text shows mixed or conflicting sentiment cues",
    ]
    .iter()
    .map(|clause| text.find(clause).expect("clause present"))
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn narrow_margin_is_called_out() {
    let result = binary("POSITIVE", 0.55);
    let config = config_with(0.5);
    let assessment = assess(&result, PLAIN_TEXT, &config).expect("assessment succeeds");

    let text = explain(&result, &assessment, &config);

    assert!(text.contains("narrow compared to the stability threshold of 0.20"));
    assert!(text.contains("at or above the confidence threshold of 0.50"));
    assert!(text.contains("stays below the review threshold of 2"));
    assert!(!text.contains("prefers deferring"));
}

#[test]
fn explanation_narrates_rather_than_recomputes() {
    let result = binary("POSITIVE", 0.9);
    let config = DecisionConfig::default();
    let mut assessment = assess(&result, CONFIDENT_TEXT, &config).expect("assessment succeeds");
    assessment.risk_signals.push(RiskSignal::LowMargin);

    let text = explain(&result, &assessment, &config);

    assert!(text.contains("which is narrow compared to the stability threshold"));
    assert!(text.contains("the score margin between the top two labels is narrow"));
}

#[test]
fn explanation_is_deterministic() {
    let engine = DecisionEngine::default();
    let result = binary("NEGATIVE", 0.61);
    let assessment = engine
        .assess(&result, HEDGED_TEXT)
        .expect("assessment succeeds");

    assert_eq!(
        engine.explain(&result, &assessment),
        engine.explain(&result, &assessment)
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "config other than the assessment's")]
fn explaining_with_a_foreign_config_is_caught_in_debug_builds() {
    let result = binary("POSITIVE", 0.6);
    let assessment =
        assess(&result, PLAIN_TEXT, &config_with(0.5)).expect("assessment succeeds");

    explain(&result, &assessment, &DecisionConfig::default());
}

#[test]
#[cfg(not(debug_assertions))]
fn thresholds_are_quoted_from_the_assessment() {
    let result = binary("POSITIVE", 0.6);
    let assessment =
        assess(&result, PLAIN_TEXT, &config_with(0.5)).expect("assessment succeeds");

    let text = explain(&result, &assessment, &DecisionConfig::default());

    assert!(text.contains("at or above the confidence threshold of 0.50"));
    assert!(!text.contains("0.70"));
}

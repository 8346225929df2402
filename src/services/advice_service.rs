//! Installation advice keyed off a stored calculation.
//!
//! Everything here is static prose selected by the results and a few raw
//! form fields — no derived computation. The estimator never calls into
//! this module.

use crate::models::roi::{AdviceReport, CalculationRecord, DustLevel, Season, WeatherCondition};
use crate::services::roi_algorithm::PAYBACK_NEVER_YEARS;

/// Qualitative weather-suitability rating from the weather factor alone
/// (not the combined irradiance multiplier).
pub fn weather_rating(weather_impact: f64) -> &'static str {
    if weather_impact >= 0.95 {
        "Excellent"
    } else if weather_impact >= 0.85 {
        "Good"
    } else {
        "Fair"
    }
}

/// Assemble the full advice report for the latest calculation.
pub fn build_report(record: &CalculationRecord) -> AdviceReport {
    AdviceReport {
        location: record.request.location.clone(),
        suitability: record.results.suitability,
        weather_rating: weather_rating(record.results.weather_impact).to_string(),
        summary: summary_line(record),
        weather_notes: weather_notes(record),
        next_steps: next_steps(),
        followup: followup_note(record.request.contact_consent),
    }
}

fn summary_line(record: &CalculationRecord) -> String {
    let results = &record.results;
    let payback = if results.payback_years >= PAYBACK_NEVER_YEARS {
        "no payback within the system's lifetime".to_string()
    } else {
        format!("payback in {:.1} years", results.payback_years)
    };
    format!(
        "Based on the conditions reported for {}: solar suitability {}, {}, projected 20-year net profit ₹{:.0}.",
        record.request.location,
        results.suitability.label(),
        payback,
        results.net_profit
    )
}

/// Site-specific installation notes. Each rule is independent; when none
/// fire, a single all-clear note is returned so clients can always render
/// the list as-is.
fn weather_notes(record: &CalculationRecord) -> Vec<String> {
    let inputs = &record.inputs;
    let request = &record.request;
    let mut notes = Vec::new();

    if matches!(
        inputs.weather_condition,
        WeatherCondition::Cloudy | WeatherCondition::VeryCloudy
    ) {
        notes.push("Consider high-efficiency panels for predominantly cloudy conditions.".to_string());
    }
    if inputs.dust_pollution == DustLevel::High {
        notes.push("Plan for regular panel cleaning (monthly) to limit soiling losses.".to_string());
    }
    if inputs.dominant_season == Season::Monsoon {
        notes.push("Use waterproof mounting and drainage systems for the wet season.".to_string());
    }
    if label_is(&request.monsoon_intensity, &["Heavy", "Very Heavy"]) {
        notes.push("Ensure robust structural support rated for heavy rains.".to_string());
    }
    if label_is(&request.wind_conditions, &["Strong Wind", "Very Windy"]) {
        notes.push("Install wind-resistant mounting systems.".to_string());
    }

    if notes.is_empty() {
        notes.push(
            "No major weather-related issues detected; a standard installation should suffice."
                .to_string(),
        );
    }
    notes
}

fn next_steps() -> Vec<String> {
    [
        "Contact local solar vendors for quotes within your budget range.",
        "Request a site inspection to confirm roof condition and shading.",
        "Evaluate subsidy opportunities in your state and through central government schemes.",
        "Plan maintenance, especially where pollution or heavy monsoon is present.",
        "Track generation with a monitoring app after installation.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn followup_note(contact_consent: bool) -> String {
    if contact_consent {
        "A solar expert may reach out with relevant offers.".to_string()
    } else {
        "You can share this report with your local installer.".to_string()
    }
}

fn label_is(value: &Option<String>, any_of: &[&str]) -> bool {
    value
        .as_deref()
        .map(|v| any_of.iter().any(|candidate| v.trim().eq_ignore_ascii_case(candidate)))
        .unwrap_or(false)
}

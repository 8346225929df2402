/// ============================================================
///  Weather-Adjusted Rooftop Solar ROI Estimation Engine
///
///  Algorithm pipeline:
///   1. Effective irradiance – base constant × weather × season
///                             × dust/soiling factors
///   2. System sizing        – consumption-driven size, capped by
///                             usable roof area
///   3. Cost                 – panel cost + installation ratio
///   4. Generation           – annual and daily output of the
///                             capped system
///   5. Monthly profile      – seasonal weighting with monsoon-dampened
///                             Jun–Sep, not re-normalized
///   6. Savings              – bill reduction capped at actual
///                             consumption (no export credit)
///   7. Payback & 20-year projection – linear, no discounting
///   8. Suitability          – three-tier verdict with a 0–100 score
/// ============================================================
use crate::models::roi::{RoiInputs, RoiResults, Season, Suitability};

// ─── Model constants ─────────────────────────────────────────
/// Average solar irradiance across India before site adjustments (kWh/m²/day).
const BASE_IRRADIANCE: f64 = 5.5;
/// End-to-end system efficiency (inverter, wiring, temperature losses).
const SYSTEM_EFFICIENCY: f64 = 0.85;
/// Installed panel cost (₹/kW).
const PANEL_COST_PER_KW: f64 = 45_000.0;
/// Installation labour and balance-of-system, as a fraction of panel cost.
const INSTALLATION_COST_RATIO: f64 = 0.30;
/// Fraction of the rooftop that can actually hold panels.
const USABLE_ROOF_FRACTION: f64 = 0.70;
/// Roof area consumed per kW of panels (sq ft).
const SQFT_PER_KW: f64 = 100.0;
/// Projection horizon for the savings series (years).
const PROJECTION_YEARS: usize = 20;
/// Score baseline shared by every suitability tier.
const BASE_SCORE: f64 = 60.0;
/// Payback sentinel meaning "effectively never" — returned instead of a
/// division by zero when annual savings are zero. A placeholder for
/// display, not a real duration.
pub const PAYBACK_NEVER_YEARS: f64 = 999.0;

/// Jan–Dec generation weights before any monsoon adjustment.
const SEASONAL_WEIGHTS: [f64; 12] = [
    0.85, 0.90, 1.00, 1.10, 1.15, 1.10, 1.05, 1.00, 0.95, 0.90, 0.85, 0.80,
];
/// Extra Jun–Sep dampening applied when the climate is monsoon-dominated.
const MONSOON_ADJUSTMENT: [f64; 12] = [
    1.0, 1.0, 1.0, 1.0, 1.0, 0.70, 0.60, 0.60, 0.80, 1.0, 1.0, 1.0,
];

/// Main entry point – one call per "Calculate" action.
///
/// Pure and deterministic: identical inputs always produce identical
/// results. Callers validate inputs first (`EstimateRequest::validate`);
/// the only guards kept here are the two divisions that would otherwise
/// be undefined for degenerate-but-valid inputs.
pub fn estimate(inputs: &RoiInputs) -> RoiResults {
    // ── 1. Effective irradiance ────────────────────────────────
    // weather_impact stays the bare weather factor; the score formula
    // uses it alone, never the combined multiplier.
    let weather_impact = inputs.weather_condition.factor();
    let effective_irradiance = BASE_IRRADIANCE
        * weather_impact
        * inputs.dominant_season.factor()
        * inputs.dust_pollution.factor();

    // ── 2. System sizing, capped by the roof ───────────────────
    let yearly_yield_per_kw = effective_irradiance * 365.0 * SYSTEM_EFFICIENCY;
    let required_kw = (inputs.monthly_units * 12.0) / yearly_yield_per_kw;
    let max_kw = (inputs.rooftop_area * USABLE_ROOF_FRACTION) / SQFT_PER_KW;
    let system_size_kw = required_kw.min(max_kw);

    // ── 3. Cost ────────────────────────────────────────────────
    let panel_cost = system_size_kw * PANEL_COST_PER_KW;
    let installation_cost = panel_cost * INSTALLATION_COST_RATIO;
    let total_investment = panel_cost + installation_cost;

    // ── 4. Generation of the capped system ─────────────────────
    let annual_generation_kwh = system_size_kw * yearly_yield_per_kw;
    let daily_average_kwh = annual_generation_kwh / 365.0;

    // ── 5. Monthly profile ─────────────────────────────────────
    let monthly_generation_kwh =
        monthly_profile(annual_generation_kwh, inputs.dominant_season);

    // ── 6. Savings, capped at actual consumption ───────────────
    // Effective per-unit rate from the reported bill. No credit for
    // generation beyond what the business consumes.
    let unit_rate = inputs.monthly_bill / inputs.monthly_units;
    let monthly_savings =
        inputs.monthly_units.min(annual_generation_kwh / 12.0) * unit_rate;
    let annual_savings = monthly_savings * 12.0;

    // ── 7. Payback ─────────────────────────────────────────────
    let payback_years = if annual_savings > 0.0 {
        total_investment / annual_savings
    } else {
        PAYBACK_NEVER_YEARS
    };

    // ── 8. 20-year linear projection ───────────────────────────
    let cumulative_savings: Vec<f64> = (1..=PROJECTION_YEARS)
        .map(|year| annual_savings * year as f64)
        .collect();
    let total_20_year_savings = annual_savings * PROJECTION_YEARS as f64;
    let net_profit = total_20_year_savings - total_investment;

    // ── 9. Suitability tier and score ──────────────────────────
    let (suitability, solar_score) = classify(
        payback_years,
        annual_generation_kwh,
        inputs.monthly_units,
        weather_impact,
    );

    // ── 10. Annual ROI ─────────────────────────────────────────
    let annual_roi_percent = if total_investment > 0.0 {
        (annual_savings / total_investment) * 100.0
    } else {
        0.0
    };

    RoiResults {
        suitability,
        solar_score,
        system_size_kw,
        total_investment,
        annual_generation_kwh,
        daily_average_kwh,
        effective_irradiance,
        monthly_generation_kwh,
        monthly_savings,
        annual_savings,
        payback_years,
        annual_roi_percent,
        cumulative_savings,
        total_20_year_savings,
        net_profit,
        weather_impact,
    }
}

/// Spread the annual figure across Jan–Dec. Each month gets
/// `annual × weight / 12`; a monsoon-dominated climate additionally
/// dampens Jun–Sep. The series is not re-normalized afterwards, so its
/// sum falls short of the annual figure: the dampening models energy
/// lost to the wet season.
fn monthly_profile(annual_generation_kwh: f64, season: Season) -> Vec<f64> {
    SEASONAL_WEIGHTS
        .iter()
        .zip(MONSOON_ADJUSTMENT.iter())
        .map(|(weight, damp)| {
            let w = if season == Season::Monsoon { weight * damp } else { *weight };
            annual_generation_kwh * w / 12.0
        })
        .collect()
}

/// Three-tier verdict, first match wins. The weather bonus uses the bare
/// weather factor (0.5–1.0 for the known labels); each tier caps its own
/// score and the result stays within [0, cap].
fn classify(
    payback_years: f64,
    annual_generation_kwh: f64,
    monthly_units: f64,
    weather_impact: f64,
) -> (Suitability, f64) {
    let weather_bonus = weather_impact * 10.0;
    let (tier, raw_score, cap) =
        if payback_years < 5.0 && annual_generation_kwh > monthly_units * 10.0 {
            (Suitability::Excellent, BASE_SCORE + 30.0 + weather_bonus, 90.0)
        } else if payback_years < 7.0 && annual_generation_kwh > monthly_units * 8.0 {
            (Suitability::Good, BASE_SCORE + 15.0 + weather_bonus, 85.0)
        } else {
            (Suitability::Average, BASE_SCORE + weather_bonus, 75.0)
        };
    (tier, raw_score.clamp(0.0, cap))
}

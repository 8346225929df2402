use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

// ─── Categorical weather factors ─────────────────────────────────────────────

/// Typical sky condition at the site, as reported by the user.
/// Each variant carries a generation multiplier applied to the base
/// irradiance; the same multiplier (alone, not combined with season/dust)
/// is the `weather_impact` figure used by the suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum WeatherCondition {
    #[default]
    Sunny,
    #[serde(rename = "Mostly Sunny")]
    MostlySunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    #[serde(rename = "Very Cloudy")]
    VeryCloudy,
}

impl WeatherCondition {
    /// Irradiance multiplier for this sky condition.
    pub fn factor(&self) -> f64 {
        match self {
            WeatherCondition::Sunny => 1.00,
            WeatherCondition::MostlySunny => 0.95,
            WeatherCondition::PartlyCloudy => 0.85,
            WeatherCondition::Cloudy => 0.70,
            WeatherCondition::Rainy => 0.60,
            WeatherCondition::VeryCloudy => 0.50,
        }
    }

    /// Parse a form label. Unknown or empty labels fall back to `Sunny`
    /// rather than failing: the factor tables treat anything unrecognized
    /// as the neutral best case.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "sunny" => WeatherCondition::Sunny,
            "mostly sunny" => WeatherCondition::MostlySunny,
            "partly cloudy" => WeatherCondition::PartlyCloudy,
            "cloudy" => WeatherCondition::Cloudy,
            "rainy" => WeatherCondition::Rainy,
            "very cloudy" => WeatherCondition::VeryCloudy,
            _ => WeatherCondition::default(),
        }
    }
}

/// Season dominating the site's year. The multiplier reshapes the base
/// irradiance; `Monsoon` additionally dampens the Jun–Sep months of the
/// monthly generation profile.
///
/// The absent-vs-unrecognized asymmetry is deliberate: a request without a
/// season gets the form default `Summer`, while a season label that matches
/// nothing maps to `Unspecified` and applies no seasonal adjustment at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum Season {
    #[default]
    Summer,
    Winter,
    Monsoon,
    #[serde(rename = "Post-Monsoon")]
    PostMonsoon,
    /// A submitted label that matches no season. Factor 1.0, never
    /// monsoon-dampened.
    Unspecified,
}

impl Season {
    /// Irradiance multiplier for the dominant season.
    pub fn factor(&self) -> f64 {
        match self {
            Season::Summer => 1.15,
            Season::Winter => 0.80,
            Season::Monsoon => 0.65,
            Season::PostMonsoon => 0.90,
            Season::Unspecified => 1.00,
        }
    }

    /// Parse a form label; anything unrecognized (including an empty
    /// string) becomes `Unspecified`. The absent-field case is the
    /// caller's to decide; `RoiInputs::from_request` maps it to the
    /// `Summer` default.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "summer" => Season::Summer,
            "winter" => Season::Winter,
            "monsoon" => Season::Monsoon,
            "post-monsoon" => Season::PostMonsoon,
            _ => Season::Unspecified,
        }
    }
}

/// Ambient dust / air-pollution level. Soiling losses scale the irradiance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum DustLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl DustLevel {
    /// Soiling multiplier for this pollution level.
    pub fn factor(&self) -> f64 {
        match self {
            DustLevel::Low => 1.00,
            DustLevel::Medium => 0.92,
            DustLevel::High => 0.85,
        }
    }

    /// Parse a form label; unknown labels fall back to `Low`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => DustLevel::Low,
            "medium" => DustLevel::Medium,
            "high" => DustLevel::High,
            _ => DustLevel::default(),
        }
    }
}

// ─── Estimator input ─────────────────────────────────────────────────────────

/// The fields the estimator actually computes from. Built from a validated
/// `EstimateRequest`; everything else on the request is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoiInputs {
    /// Monthly electricity consumption (kWh)
    pub monthly_units: f64,
    /// Average monthly electricity bill (₹); only used to derive the
    /// effective per-unit rate
    pub monthly_bill: f64,
    /// Usable rooftop area (sq ft)
    pub rooftop_area: f64,
    pub weather_condition: WeatherCondition,
    pub dominant_season: Season,
    pub dust_pollution: DustLevel,
}

impl RoiInputs {
    pub fn from_request(req: &EstimateRequest) -> Self {
        Self {
            monthly_units: req.monthly_units,
            monthly_bill: req.monthly_bill,
            rooftop_area: req.rooftop_area,
            weather_condition: WeatherCondition::from_label(
                req.weather_condition.as_deref().unwrap_or_default(),
            ),
            // Absent season means the Summer default; a present label is
            // parsed and may land on Unspecified.
            dominant_season: req
                .dominant_season
                .as_deref()
                .map_or(Season::default(), Season::from_label),
            dust_pollution: DustLevel::from_label(req.dust_pollution.as_deref().unwrap_or_default()),
        }
    }
}

// ─── Estimator output ────────────────────────────────────────────────────────

/// Qualitative three-tier verdict derived from payback speed and the
/// generation-to-consumption ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Suitability {
    Excellent,
    Good,
    Average,
}

impl Suitability {
    pub fn label(&self) -> &'static str {
        match self {
            Suitability::Excellent => "Excellent",
            Suitability::Good => "Good",
            Suitability::Average => "Average",
        }
    }
}

/// Complete financial and generation projection for one calculation.
/// A deterministic pure function of `RoiInputs`, with no randomness and
/// no hidden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoiResults {
    pub suitability: Suitability,
    /// Confidence score, 0–100
    pub solar_score: f64,
    /// Installed nameplate capacity after the roof-area cap (kW)
    pub system_size_kw: f64,
    /// Panels plus installation (₹)
    pub total_investment: f64,
    /// Nominal yearly output of the capped system (kWh)
    pub annual_generation_kwh: f64,
    /// annual_generation / 365 (kWh)
    pub daily_average_kwh: f64,
    /// Weather-adjusted irradiance (kWh/m²/day): base × weather × season × dust
    pub effective_irradiance: f64,
    /// Jan–Dec generation forecast (kWh). Under a monsoon-dominated climate
    /// the Jun–Sep entries are dampened and the series sums short of
    /// `annual_generation_kwh`; that gap is intended.
    pub monthly_generation_kwh: Vec<f64>,
    /// Bill reduction per month (₹), capped at the current bill
    pub monthly_savings: f64,
    pub annual_savings: f64,
    /// Years to recover the investment; 999 is a sentinel for "effectively
    /// never" (zero savings), not a real duration
    pub payback_years: f64,
    /// annual_savings / total_investment × 100; 0 when there is nothing to
    /// invest in
    pub annual_roi_percent: f64,
    /// Cumulative savings at the end of years 1–20 (₹), linear
    pub cumulative_savings: Vec<f64>,
    pub total_20_year_savings: f64,
    /// 20-year savings minus the investment (₹)
    pub net_profit: f64,
    /// The weather-condition multiplier alone, kept separate from
    /// `effective_irradiance` (which also folds in season and dust)
    pub weather_impact: f64,
}

// ─── Wire types ──────────────────────────────────────────────────────────────

/// One "Calculate" submission from the form. The three numeric fields and
/// the three factor labels drive the estimate; the rest is carried through
/// for display and for keying the installation advice.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EstimateRequest {
    /// Business location (city/region name); a display label only, never
    /// a calculation input
    #[serde(default)]
    pub location: String,
    /// Monthly electricity consumption (kWh)
    pub monthly_units: f64,
    /// Average monthly electricity bill (₹)
    pub monthly_bill: f64,
    /// Usable rooftop area (sq ft)
    pub rooftop_area: f64,
    /// One of the `WeatherCondition` labels; anything else means Sunny
    #[serde(default)]
    pub weather_condition: Option<String>,
    /// One of the `Season` labels; anything else means Summer
    #[serde(default)]
    pub dominant_season: Option<String>,
    /// One of the `DustLevel` labels; anything else means Low
    #[serde(default)]
    pub dust_pollution: Option<String>,

    // Display-only context from the rest of the form.
    #[serde(default)]
    pub business_type: Option<String>,
    /// Daily operating hours
    #[serde(default)]
    pub operating_hours: Option<u8>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub roof_type: Option<String>,
    #[serde(default)]
    pub roof_condition: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    /// Consent to be contacted with installer quotes
    #[serde(default)]
    pub contact_consent: bool,
    /// Average sunny days per month
    #[serde(default)]
    pub sunny_days: Option<u8>,
    #[serde(default)]
    pub temp_range: Option<String>,
    #[serde(default)]
    pub shading_issues: Option<String>,
    /// Light / Moderate / Heavy / Very Heavy
    #[serde(default)]
    pub monsoon_intensity: Option<String>,
    /// Calm … Very Windy
    #[serde(default)]
    pub wind_conditions: Option<String>,
}

impl EstimateRequest {
    /// Boundary validation: the estimator is only invoked with inputs that
    /// pass this check. Factor labels are not validated here; unknown
    /// labels fall back to their defaults instead of failing.
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.location.trim().is_empty() {
            return Err(EstimateError::MissingLocation);
        }
        if self.monthly_units <= 0.0 || !self.monthly_units.is_finite() {
            return Err(EstimateError::NonPositiveConsumption(self.monthly_units));
        }
        if self.rooftop_area <= 0.0 || !self.rooftop_area.is_finite() {
            return Err(EstimateError::NonPositiveArea(self.rooftop_area));
        }
        if self.monthly_bill < 0.0 || !self.monthly_bill.is_finite() {
            return Err(EstimateError::NegativeBill(self.monthly_bill));
        }
        Ok(())
    }
}

/// Everything the service remembers about the latest calculation: the raw
/// submission, the typed inputs the estimator saw, and its results. Held
/// until the next calculation overwrites it; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationRecord {
    pub submitted_at: DateTime<Utc>,
    pub request: EstimateRequest,
    pub inputs: RoiInputs,
    pub results: RoiResults,
}

/// Advice derived from the stored calculation: all static prose keyed off
/// the results and a few raw form fields, no computation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdviceReport {
    pub location: String,
    pub suitability: Suitability,
    /// Excellent / Good / Fair, from the weather factor alone
    pub weather_rating: String,
    pub summary: String,
    /// Site-specific installation notes (cloud, dust, monsoon, wind)
    pub weather_notes: Vec<String>,
    pub next_steps: Vec<String>,
    pub followup: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Whether a calculation record is currently stored
    pub calculation_stored: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClearResponse {
    pub cleared: bool,
}

// ─── Validation errors ───────────────────────────────────────────────────────

/// Rejections raised at the API boundary before the estimator runs.
/// Degenerate but well-formed inputs (e.g. a zero bill) are not errors;
/// they flow through to the payback sentinel instead.
#[derive(Debug, Error, PartialEq)]
pub enum EstimateError {
    #[error("monthly electricity consumption must be greater than zero (got {0})")]
    NonPositiveConsumption(f64),
    #[error("rooftop area must be greater than zero (got {0} sq ft)")]
    NonPositiveArea(f64),
    #[error("monthly bill must not be negative (got {0})")]
    NegativeBill(f64),
    #[error("location is required")]
    MissingLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_request() -> EstimateRequest {
        EstimateRequest {
            location: "Pune".to_string(),
            monthly_units: 2000.0,
            monthly_bill: 13000.0,
            rooftop_area: 1000.0,
            weather_condition: None,
            dominant_season: None,
            dust_pollution: None,
            business_type: None,
            operating_hours: None,
            budget_range: None,
            roof_type: None,
            roof_condition: None,
            priority: None,
            timeline: None,
            contact_consent: false,
            sunny_days: None,
            temp_range: None,
            shading_issues: None,
            monsoon_intensity: None,
            wind_conditions: None,
        }
    }

    #[test]
    fn weather_factors_match_table() {
        assert_eq!(WeatherCondition::Sunny.factor(), 1.00);
        assert_eq!(WeatherCondition::MostlySunny.factor(), 0.95);
        assert_eq!(WeatherCondition::PartlyCloudy.factor(), 0.85);
        assert_eq!(WeatherCondition::Cloudy.factor(), 0.70);
        assert_eq!(WeatherCondition::Rainy.factor(), 0.60);
        assert_eq!(WeatherCondition::VeryCloudy.factor(), 0.50);
    }

    #[test]
    fn season_and_dust_factors_match_table() {
        assert_eq!(Season::Summer.factor(), 1.15);
        assert_eq!(Season::Winter.factor(), 0.80);
        assert_eq!(Season::Monsoon.factor(), 0.65);
        assert_eq!(Season::PostMonsoon.factor(), 0.90);
        assert_eq!(Season::Unspecified.factor(), 1.00);
        assert_eq!(DustLevel::Low.factor(), 1.00);
        assert_eq!(DustLevel::Medium.factor(), 0.92);
        assert_eq!(DustLevel::High.factor(), 0.85);
    }

    #[test]
    fn labels_parse_leniently_and_never_fail() {
        assert_eq!(WeatherCondition::from_label("Very Cloudy"), WeatherCondition::VeryCloudy);
        assert_eq!(WeatherCondition::from_label("  mostly sunny "), WeatherCondition::MostlySunny);
        assert_eq!(WeatherCondition::from_label("Hailstorm"), WeatherCondition::Sunny);
        assert_eq!(WeatherCondition::from_label(""), WeatherCondition::Sunny);
        assert_eq!(Season::from_label("post-monsoon"), Season::PostMonsoon);
        assert_eq!(Season::from_label("Autumn"), Season::Unspecified);
        assert_eq!(Season::from_label(""), Season::Unspecified);
        assert_eq!(DustLevel::from_label("HIGH"), DustLevel::High);
        assert_eq!(DustLevel::from_label("Severe"), DustLevel::Low);
    }

    #[test]
    fn factor_enums_serialize_as_their_form_labels() {
        // Stored inputs reach clients through serde; the rename attributes
        // must keep producing the exact option strings the form offers.
        assert_eq!(serde_json::to_value(WeatherCondition::MostlySunny).unwrap(), "Mostly Sunny");
        assert_eq!(serde_json::to_value(WeatherCondition::VeryCloudy).unwrap(), "Very Cloudy");
        assert_eq!(serde_json::to_value(Season::PostMonsoon).unwrap(), "Post-Monsoon");
        assert_eq!(serde_json::to_value(Season::Monsoon).unwrap(), "Monsoon");
        assert_eq!(serde_json::to_value(DustLevel::High).unwrap(), "High");
    }

    #[test]
    fn request_without_factor_labels_maps_to_neutral_inputs() {
        let inputs = RoiInputs::from_request(&minimal_request());
        assert_eq!(inputs.weather_condition, WeatherCondition::Sunny);
        assert_eq!(inputs.dominant_season, Season::Summer);
        assert_eq!(inputs.dust_pollution, DustLevel::Low);
        assert_eq!(inputs.monthly_units, 2000.0);
    }

    #[test]
    fn unrecognized_season_label_skips_the_seasonal_adjustment() {
        // Absent → form default Summer; a label that matches nothing →
        // Unspecified, which neither boosts irradiance nor dampens months.
        let mut req = minimal_request();
        req.dominant_season = Some("Autumn".to_string());
        let inputs = RoiInputs::from_request(&req);
        assert_eq!(inputs.dominant_season, Season::Unspecified);
        assert_eq!(inputs.dominant_season.factor(), 1.00);
    }

    #[test]
    fn validation_rejects_bad_numerics_and_missing_location() {
        let ok = minimal_request();
        assert!(ok.validate().is_ok());

        let mut bad = minimal_request();
        bad.monthly_units = 0.0;
        assert_eq!(bad.validate(), Err(EstimateError::NonPositiveConsumption(0.0)));

        let mut bad = minimal_request();
        bad.rooftop_area = -5.0;
        assert_eq!(bad.validate(), Err(EstimateError::NonPositiveArea(-5.0)));

        let mut bad = minimal_request();
        bad.monthly_bill = -1.0;
        assert_eq!(bad.validate(), Err(EstimateError::NegativeBill(-1.0)));

        let mut bad = minimal_request();
        bad.location = "   ".to_string();
        assert_eq!(bad.validate(), Err(EstimateError::MissingLocation));
    }

    #[test]
    fn zero_bill_is_degenerate_but_valid() {
        let mut req = minimal_request();
        req.monthly_bill = 0.0;
        assert!(req.validate().is_ok(), "zero bill is the sentinel path, not a rejection");
    }
}

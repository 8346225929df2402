use utoipa::OpenApi;
use crate::controllers::roi_controller;
use crate::models::roi;

#[derive(OpenApi)]
#[openapi(
    paths(
        roi_controller::calculate,
        roi_controller::get_last_estimate,
        roi_controller::clear_estimate,
        roi_controller::get_recommendations,
        roi_controller::list_cities,
        roi_controller::health
    ),
    components(
        schemas(
            roi::EstimateRequest,
            roi::RoiInputs,
            roi::RoiResults,
            roi::CalculationRecord,
            roi::AdviceReport,
            roi::HealthStatus,
            roi::ClearResponse,
            roi::WeatherCondition,
            roi::Season,
            roi::DustLevel,
            roi::Suitability
        )
    ),
    tags(
        (name = "solar-roi-estimator", description = "Weather-adjusted rooftop solar ROI estimation API")
    )
)]
pub struct ApiDoc;

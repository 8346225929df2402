use std::sync::{Arc, RwLock};
use std::time::Instant;

use crate::models::roi::CalculationRecord;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Most recent calculation, if any. A new estimate replaces it.
    pub last_calculation: Arc<RwLock<Option<CalculationRecord>>>,
    /// Process start, for the health endpoint's uptime report.
    started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            last_calculation: Arc::new(RwLock::new(None)),
            started_at: Instant::now(),
        }
    }

    pub fn set_record(&self, record: CalculationRecord) {
        if let Ok(mut slot) = self.last_calculation.write() {
            tracing::debug!(
                location = %record.request.location,
                system_size_kw = record.results.system_size_kw,
                "storing calculation"
            );
            *slot = Some(record);
        }
    }

    pub fn get_record(&self) -> Option<CalculationRecord> {
        if let Ok(slot) = self.last_calculation.read() {
            slot.clone()
        } else {
            None
        }
    }

    /// Drop the stored calculation. Returns whether one was present.
    pub fn clear_record(&self) -> bool {
        if let Ok(mut slot) = self.last_calculation.write() {
            slot.take().is_some()
        } else {
            false
        }
    }

    pub fn has_record(&self) -> bool {
        if let Ok(slot) = self.last_calculation.read() {
            slot.is_some()
        } else {
            false
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roi::{EstimateRequest, RoiInputs};
    use crate::services::roi_algorithm;
    use chrono::Utc;

    fn sample_record(location: &str) -> CalculationRecord {
        let request = EstimateRequest {
            location: location.to_string(),
            monthly_units: 1500.0,
            monthly_bill: 11000.0,
            rooftop_area: 900.0,
            ..Default::default()
        };
        let inputs = RoiInputs::from_request(&request);
        let results = roi_algorithm::estimate(&inputs);
        CalculationRecord {
            submitted_at: Utc::now(),
            request,
            inputs,
            results,
        }
    }

    #[test]
    fn slot_starts_empty_and_round_trips_a_record() {
        let state = AppState::new();
        assert!(!state.has_record());
        assert!(state.get_record().is_none());

        state.set_record(sample_record("Jaipur"));
        assert!(state.has_record());
        assert_eq!(state.get_record().unwrap().request.location, "Jaipur");
    }

    #[test]
    fn a_new_estimate_replaces_the_previous_one() {
        let state = AppState::new();
        state.set_record(sample_record("Surat"));
        state.set_record(sample_record("Kochi"));
        assert_eq!(state.get_record().unwrap().request.location, "Kochi");
    }

    #[test]
    fn clear_reports_whether_anything_was_stored() {
        let state = AppState::new();
        assert!(!state.clear_record());
        state.set_record(sample_record("Bhopal"));
        assert!(state.clear_record());
        assert!(!state.has_record());
        assert!(!state.clear_record());
    }

    #[test]
    fn clones_share_the_same_slot() {
        let state = AppState::new();
        let view = state.clone();
        state.set_record(sample_record("Indore"));
        assert!(view.has_record());
    }
}

pub mod advice_service;
pub mod roi_algorithm;

pub mod roi_routes;

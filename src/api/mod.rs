//! HTTP API module for the Assembly Cost Engine.
//!
//! This module provides the REST API endpoints for calculating assembly cost
//! estimates, downloading them as spreadsheets and listing public holidays.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DayRequest, EstimateRequest, PlannedEstimate};
pub use response::{ApiError, ApiErrorResponse, EstimateResponse};
pub use state::AppState;

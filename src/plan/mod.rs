//! Trip-planning domain: request contract, itinerary contract, and the
//! validation / repair / grounding pipeline between raw model text and the
//! typed response.

pub mod extract;
pub mod filter;
pub mod itinerary;
pub mod pipeline;
pub mod prompt;
pub mod repair;
pub mod request;

pub use itinerary::{Day, Itinerary, ItineraryItem};
pub use pipeline::{PlanError, PlanSuccess, Planner};
pub use request::{BaseRegion, FieldViolation, Pace, Transport, TripRequest, Weather};

//! Itinera - LLM-backed trip-itinerary service
//!
//! A demo trip-planning backend: a client submits travel preferences, a
//! hosted generative model proposes a day-by-day itinerary restricted to a
//! curated POI catalog, and the pipeline in [`plan`] validates, repairs and
//! grounds the model output before anything reaches the client.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod plan;

//! Delivery Recommender - food-delivery app recommendation.
//!
//! Criterion weights are derived from pairwise comparisons (AHP priority
//! vector) and the apps are ranked with fuzzy TOPSIS against those weights.
//!
//! ```
//! use std::sync::Arc;
//! use delivery_recommender::application::{
//!     RecommendApplicationCommand, RecommendApplicationHandler, ScoringSettings,
//! };
//! use delivery_recommender::domain::ranking::{ComparisonOption, DecisionDomain};
//!
//! let handler = RecommendApplicationHandler::new(
//!     Arc::new(DecisionDomain::food_delivery()),
//!     ScoringSettings::default(),
//! );
//! let answers = vec![ComparisonOption::Equal; 21];
//! let cmd = RecommendApplicationCommand::from_answers(&handler.questionnaire(), &answers).unwrap();
//! let result = handler.handle(cmd).unwrap();
//! assert_eq!(result.summary.best.code, "GO");
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

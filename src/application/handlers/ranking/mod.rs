//! Ranking handlers.

mod recommend_application;

pub use recommend_application::{
    RecommendApplicationCommand, RecommendApplicationHandler, ScoringSettings,
};

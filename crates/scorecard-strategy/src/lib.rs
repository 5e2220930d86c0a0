//! Scorecard Strategy - comparable-profile guidance
//!
//! Static lookup that turns an event profile (objective, scale, audience,
//! investment) into benchmarking guidance: a description of the ideal
//! comparable past event, prioritized guidance notes, per-metric priorities,
//! and strategic considerations. Pure data in, pure data out; no network or
//! model calls.

#![warn(unreachable_pub)]

pub mod profile;

pub use profile::{
    generate_strategy, CampaignScale, Consideration, ConsiderationKind, EventProfile,
    GuidanceNote, InvestmentLevel, MetricPriority, Objective, Priority, StrategyProfile,
    TargetAudience,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

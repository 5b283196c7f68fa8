// Library exports for the CLI and tests
pub mod buckets;
pub mod dataset;
pub mod emoji;
pub mod error;
pub mod export;
pub mod group;
pub mod logging;
pub mod render;
pub mod stats;
pub mod stats_builder;
pub mod text;
pub mod timefmt;

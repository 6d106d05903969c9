pub mod calendar;
pub mod climate;
pub mod config;
pub mod inputs;
pub mod insights;
pub mod market;
pub mod output;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod soil;

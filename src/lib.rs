pub mod configuration;
pub mod constant;
pub mod domain;
pub mod error;
pub mod navigator;
pub mod request;
pub mod reset_client;
pub mod telemetry;
pub mod view;
pub mod workflow;

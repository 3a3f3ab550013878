pub mod app_config;
pub mod discovery;
pub mod domain;
pub mod event_listener;
pub mod maker;
pub mod webhook;

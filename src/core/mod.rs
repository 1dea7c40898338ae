pub mod app;
pub mod backend;
pub mod config;
pub mod constants;
pub mod exchange;
pub mod message;
pub mod notification;
pub mod session;

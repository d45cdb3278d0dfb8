//! RODENTIA storefront: server-rendered page and JSON catalog API.

pub mod app;
pub mod config;
pub mod content;
pub mod middleware;
pub mod views;

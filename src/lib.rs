pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod dom;
pub mod error;
pub mod models;
pub mod pages;
pub mod rating;
pub mod render;
pub mod seo;
pub mod services;
pub mod site;
pub mod state;

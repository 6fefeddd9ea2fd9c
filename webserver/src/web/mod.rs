//! Web layer: request handlers mounted by the router

pub mod handlers;

//! Theme park plan optimizer server.
//!
//! A web application that answers: "with this much time, which rides should
//! I go on, and in what order, to have the most thrilling day?"

pub mod auth;
pub mod cache;
pub mod catalog;
pub mod domain;
pub mod planner;
pub mod settings;
pub mod web;

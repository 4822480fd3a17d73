//! Bus route planner server.
//!
//! A web application that answers: "which buses take me from this stop
//! to that stop, and where do I change?"

pub mod cache;
pub mod catalog;
pub mod domain;
pub mod planner;
pub mod web;

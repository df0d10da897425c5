//! Railway route finder server.
//!
//! A web application that answers: "which sequence of trains gets me from
//! this station to that one with the fewest boardings?"

pub mod domain;
pub mod network;
pub mod planner;
pub mod schedule;
pub mod web;

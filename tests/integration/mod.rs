//! Integration tests for the Glif adapter

mod action_flow;
mod glif_endpoint;

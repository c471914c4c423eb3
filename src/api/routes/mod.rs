//! API Route Handlers
//!
//! Each route module contains the handler functions for one endpoint
//! group.

pub mod health;
pub mod industry;

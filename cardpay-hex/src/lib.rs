//! # Cardpay Hex
//!
//! Application service layer and HTTP adapters for the two services.
//!
//! ## Architecture
//!
//! - `service/` - Application services (orchestrate domain operations)
//! - `inbound/` - HTTP adapters (Axum routers for each service)
//!
//! Services are generic over the repository ports, so adapters are
//! injected at compile time and tests can swap in whatever they need.

pub mod inbound;
pub mod service;


pub use service::{AccountService, CardService};

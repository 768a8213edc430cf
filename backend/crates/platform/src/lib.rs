//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Outbound HTTP client construction and failure classification
//! - Base64 encoding
//! - Sliding-window rate limiting
//! - Image silhouettes and PNG payload encoding

pub mod client;
pub mod encoding;
pub mod rate_limit;
pub mod silhouette;

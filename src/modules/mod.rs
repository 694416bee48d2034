//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the upload directory and outbound notifications.

pub mod notification;
pub mod storage;

//! HTTP layer: request/response types, REST helpers, and the prediction
//! client.

pub mod api;
pub mod prediccion;
pub mod types;

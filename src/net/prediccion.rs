//! Thin client for the performance-prediction endpoint.
//!
//! The model itself runs in the backend; this wrapper only shapes the
//! request and decodes the response rows.

use serde::Deserialize;

use super::api::{self, ApiError};
use crate::state::store::SessionStore;

/// One prediction row as the backend reports it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Prediccion {
    pub estudiante_id: i64,
    pub estudiante: String,
    pub nota_predicha: f64,
    pub nivel_riesgo: String,
}

/// Fetch predictions for one subject's roster.
///
/// # Errors
///
/// Propagates the [`ApiError`] taxonomy of [`api::get_json`]; a 401 has
/// already forced a logout by the time it surfaces here.
pub async fn fetch_predicciones(
    session: &SessionStore,
    materia_id: i64,
) -> Result<Vec<Prediccion>, ApiError> {
    let path = format!("/api/prediccion-rendimiento/?materia={materia_id}");
    api::get_json(session, &path).await
}

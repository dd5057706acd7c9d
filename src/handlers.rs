//! GET handlers for the four hierarchy levels.
//!
//! Each handler validates its required query parameters, runs the matching
//! dataset lookup, and serializes the result as a JSON array. An unknown but
//! well-formed identifier still yields 200 with `null`/empty — that behavior
//! is load-bearing for existing clients and is covered by the integration
//! tests.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::dataset::{Class, Equipment, Grade, School};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GradesQuery {
    pub school_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClassesQuery {
    pub school_id: Option<String>,
    pub grade_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EquipmentQuery {
    pub school_id: Option<String>,
    pub grade_id: Option<String>,
    pub class_id: Option<String>,
}

/// Rejects missing or empty parameters before any lookup runs.
fn require_param(value: Option<String>, name: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => {
            warn!("rejecting request: missing or empty {}", name);
            Err(ApiError::MissingParam(name))
        }
    }
}

/// GET /api/schools
pub async fn get_schools(State(state): State<AppState>) -> Json<Vec<School>> {
    debug!("listing all schools");
    Json(state.dataset.schools().to_vec())
}

/// GET /api/grades?school_id=...
pub async fn get_grades(
    State(state): State<AppState>,
    Query(params): Query<GradesQuery>,
) -> Result<Json<Option<Vec<Grade>>>, ApiError> {
    let school_id = require_param(params.school_id, "school_id")?;
    debug!(school_id, "listing grades");

    let grades = state
        .dataset
        .grades_by_school(&school_id)
        .map(|g| g.to_vec());
    Ok(Json(grades))
}

/// GET /api/classes?school_id=...&grade_id=...
pub async fn get_classes(
    State(state): State<AppState>,
    Query(params): Query<ClassesQuery>,
) -> Result<Json<Option<Vec<Class>>>, ApiError> {
    let school_id = require_param(params.school_id, "school_id")?;
    let grade_id = require_param(params.grade_id, "grade_id")?;
    debug!(school_id, grade_id, "listing classes");

    let classes = state
        .dataset
        .classes_by_grade(&school_id, &grade_id)
        .map(|c| c.to_vec());
    Ok(Json(classes))
}

/// GET /api/equipment?school_id=...&grade_id=...&class_id=...
pub async fn get_equipment(
    State(state): State<AppState>,
    Query(params): Query<EquipmentQuery>,
) -> Result<Json<Vec<Equipment>>, ApiError> {
    let school_id = require_param(params.school_id, "school_id")?;
    let grade_id = require_param(params.grade_id, "grade_id")?;
    let class_id = require_param(params.class_id, "class_id")?;
    debug!(school_id, grade_id, class_id, "listing equipment");

    let list = state
        .dataset
        .equipment_list(&school_id, &grade_id, &class_id);
    Ok(Json(list.to_vec()))
}

/// GET /api/health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "schoolgear-server",
    }))
}

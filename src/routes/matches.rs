use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{aggregate_answers, build_student_profile, MatchError, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, MatchRequest, MatchResponse, PersonaRequest, TeachersQuery,
    TeachersResponse,
};
use crate::services::TeacherCatalog;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TeacherCatalog>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(find_matches))
        .route("/persona", web::post().to(build_persona))
        .route("/teachers", web::get().to(list_teachers))
        .route("/teachers/{teacher_id}", web::get().to(get_teacher));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn match_error(err: &MatchError) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: "Incomplete persona".to_string(),
        message: err.to_string(),
        status_code: 422,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let teachers = state.catalog.len();
    let status = if teachers > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        teachers,
    })
}

/// Match endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "studentPersona": { "pace": 0.4, "structure": 0.6, ... },
///   "subject": "Biology"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    let subject = req.subject.as_deref();

    match state
        .matcher
        .find_matches(&req.student_persona, state.catalog.teachers(), subject)
    {
        Ok(outcome) => {
            tracing::info!(
                "Returning {} ranked teachers (from {} candidates, subject: {:?})",
                outcome.ranked.len(),
                outcome.total_candidates,
                subject
            );

            HttpResponse::Ok().json(MatchResponse {
                ranked: outcome.ranked,
                total_results: outcome.total_candidates,
            })
        }
        Err(e) => {
            tracing::warn!("Rejected match request: {}", e);
            match_error(&e)
        }
    }
}

/// Persona endpoint
///
/// POST /api/v1/persona
///
/// Request body:
/// ```json
/// {
///   "name": "Ada",
///   "answers": [
///     { "label": "A", "dimensions": { "pace": 0.8, "structure": 0.3 } }
///   ]
/// }
/// ```
async fn build_persona(req: web::Json<PersonaRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for persona request: field_errors={:?}", errors);
        return validation_error(errors);
    }

    let persona = aggregate_answers(&req.answers);
    let profile = build_student_profile(req.name.as_deref(), persona);

    tracing::info!(
        "Built student profile {} ({}) from {} answers",
        profile.student_id,
        profile.archetype,
        req.answers.len()
    );

    HttpResponse::Ok().json(profile)
}

/// Teacher listing
///
/// GET /api/v1/teachers?subject={subject}
async fn list_teachers(
    state: web::Data<AppState>,
    query: web::Query<TeachersQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let teachers: Vec<_> = state
        .catalog
        .by_subject(query.subject.as_deref())
        .into_iter()
        .cloned()
        .collect();

    HttpResponse::Ok().json(TeachersResponse {
        count: teachers.len(),
        teachers,
    })
}

/// Single teacher lookup
///
/// GET /api/v1/teachers/{teacher_id}
async fn get_teacher(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let teacher_id = path.into_inner();

    match state.catalog.get(&teacher_id) {
        Some(teacher) => HttpResponse::Ok().json(teacher),
        None => {
            tracing::debug!("Teacher {} not found in catalog", teacher_id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: format!("No teacher with id {}", teacher_id),
                status_code: 404,
            })
        }
    }
}

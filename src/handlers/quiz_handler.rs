use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::{
        domain::Quiz,
        dto::response::{MessageResponse, QuizListResponse, QuizResponse},
    },
};

#[post("/create_quiz")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    quiz: web::Json<Quiz>,
) -> Result<HttpResponse, AppError> {
    let id = state
        .quiz_service
        .create_quiz(&auth.0, quiz.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::quiz_created(&id)))
}

#[get("/get_quizzes")]
pub async fn get_quizzes(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes(&auth.0).await?;
    Ok(HttpResponse::Ok().json(QuizListResponse { quizzes }))
}

#[delete("/delete_quiz/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser, // Any verified caller, owner is not checked
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state.quiz_service.delete_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::quiz_deleted(&id)))
}

#[get("/get_quiz/{perma_url}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    perma_url: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz_by_perma_url(&perma_url).await?;
    Ok(HttpResponse::Ok().json(QuizResponse { quiz }))
}

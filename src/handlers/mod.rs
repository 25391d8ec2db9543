pub mod quiz_handler;
pub mod root_handler;

use actix_web::web;

use crate::{errors::AppError, middleware::get_request_id};

/// Registers every route of the quiz API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root_handler::index)
        .service(root_handler::health_check)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::get_quizzes)
        .service(quiz_handler::delete_quiz)
        .service(quiz_handler::get_quiz);
}

/// JSON body config whose parse failures render as the 500 error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!(
            "Rejected request body [{}]: {}",
            get_request_id(req).unwrap_or_default(),
            err
        );
        AppError::InvalidPayload(err.to_string()).into()
    })
}

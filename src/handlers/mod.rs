use actix_web::web;

use crate::errors::AppError;

pub mod employee;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employees")
            .route(web::get().to(employee::get_employees))
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/employees/{id}")
            .route(web::get().to(employee::get_employee))
            .route(web::put().to(employee::update_employee))
            .route(web::patch().to(employee::patch_employee))
            .route(web::delete().to(employee::delete_employee)),
    );
}

/// Absent, oversized or unparsable JSON bodies all answer 400.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _| AppError::MalformedRequest(format!("Invalid request body: {}", err)).into())
}

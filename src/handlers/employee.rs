use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::employee::{EmployeePatch, NewEmployee};
use crate::services::EmployeeService;

pub async fn get_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    let new_employee = new_employee.into_inner();
    let id = service.create(&new_employee).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/employees/{}", id)))
        .json(new_employee))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i32>,
    employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    service.replace(id.into_inner(), &employee).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn patch_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i32>,
    updates: web::Json<EmployeePatch>,
) -> Result<HttpResponse, AppError> {
    service.partial_update(id.into_inner(), &updates).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

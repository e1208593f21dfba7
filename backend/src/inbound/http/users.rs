//! User API handlers.
//!
//! ```text
//! GET    /users
//! POST   /users       {"first_name":"A","last_name":"B","age":30,...}
//! GET    /users/{id}
//! PUT    /users/{id}  every user field, null allowed
//! DELETE /users/{id}
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::UserFields;
use crate::inbound::http::ApiResult;
use crate::inbound::http::respond;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Body for `POST /users`. Absent fields are stored as null.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

impl From<NewUserRequest> for UserFields {
    fn from(value: NewUserRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            age: value.age,
            email: value.email,
            role: value.role,
            phone: value.phone,
        }
    }
}

/// Body for `PUT /users/{id}`.
///
/// Every key must be present; `null` clears the column. Other keys are
/// ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceUserRequest {
    #[serde(deserialize_with = "Option::deserialize")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub age: Option<i32>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub email: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub role: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub phone: Option<String>,
}

impl From<ReplaceUserRequest> for UserFields {
    fn from(value: ReplaceUserRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            age: value.age,
            email: value.email,
            role: value.role,
            phone: value.phone,
        }
    }
}

/// List every user in id order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema], content_type = "application/json; charset=utf-8"),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users.list().await?;
    respond::records(&users)
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = NewUserRequest,
    responses(
        (status = 201, description = "User created; empty body"),
        (status = 400, description = "Malformed body or unknown field", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<NewUserRequest>,
) -> ApiResult<HttpResponse> {
    let fields = UserFields::from(payload.into_inner());
    state.users.create(&fields).await?;
    Ok(respond::empty(StatusCode::CREATED))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserSchema, content_type = "application/json; charset=utf-8"),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id:\\d+}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let user = state.users.find(path.into_inner()).await?;
    respond::record(&user)
}

/// Replace every field of a user. Answers 200 with an empty body.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = ReplaceUserRequest,
    responses(
        (status = 200, description = "User replaced; empty body"),
        (status = 400, description = "A user field is missing or mistyped", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "replaceUser"
)]
#[put("/users/{id:\\d+}")]
pub async fn replace_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<ReplaceUserRequest>,
) -> ApiResult<HttpResponse> {
    let fields = UserFields::from(payload.into_inner());
    state.users.replace(path.into_inner(), &fields).await?;
    Ok(respond::empty(StatusCode::OK))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id:\\d+}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.users.delete(path.into_inner()).await?;
    Ok(respond::empty(StatusCode::NO_CONTENT))
}

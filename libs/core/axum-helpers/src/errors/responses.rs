//! Reusable OpenAPI response definitions for the error envelope.

use super::ErrorResponse;
use utoipa::ToResponse;

/// 400 with the uniform envelope (bad body, bad filter, domain validation)
#[derive(ToResponse)]
#[response(description = "Malformed or invalid request")]
pub struct BadRequestResponse(ErrorResponse);

/// 404 with the uniform envelope
#[derive(ToResponse)]
#[response(description = "Entity not found")]
pub struct NotFoundResponse(ErrorResponse);

/// 500 with the uniform envelope
#[derive(ToResponse)]
#[response(description = "Unexpected server error")]
pub struct InternalServerErrorResponse(ErrorResponse);

use std::future::Future;
use std::pin::Pin;

use actix_web::http::header;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};

use crate::domain::ports::UserRepository;
use crate::domain::user::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;

/// The authentication boundary: extracts the bearer token, verifies it and
/// resolves the subject to a stored user, so handlers receive an explicit
/// `CurrentUser` instead of reading ambient state. Every failure mode
/// (missing header, malformed/expired token, unknown subject) is the same
/// 401 to the caller.
impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                AppError::Internal("application state is not configured".to_string())
            })?;
            let token = bearer.ok_or(AppError::Authentication)?;
            let claims = state
                .tokens
                .verify(&token)
                .ok_or(AppError::Authentication)?;

            let users = state.users.clone();
            let user = web::block(move || users.find_by_email(&claims.sub))
                .await
                .map_err(|e| AppError::Internal(e.to_string()))??
                .ok_or(AppError::Authentication)?;

            Ok(CurrentUser {
                id: user.id,
                email: user.email,
                role: user.role,
            })
        })
    }
}

/**
 * Authentication Middleware
 *
 * Protects routes behind bearer-token authentication. The middleware
 * extracts the `Authorization: Bearer <token>` header, resolves it through
 * `AuthService::current_principal` (verify, subject lookup, is_active
 * check), and attaches the resulting principal to the request extensions.
 *
 * A missing or malformed header is rejected before any route logic runs,
 * with the same 401 body as an invalid token.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::error::AuthError;
use crate::auth::service::AuthService;
use crate::error::ApiError;
use crate::users::User;

/// The authenticated principal for the current request
///
/// Inserted by `require_auth`; handlers receive it as an extractor.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Bearer-token middleware for protected routes
///
/// # Errors
///
/// `401 Unauthorized` (with the bearer challenge header) when the
/// Authorization header is missing, is not a bearer header, or the token
/// fails verification or identity resolution.
pub async fn require_auth(
    State(auth): State<AuthService>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MalformedToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedToken)?;

    let user = auth.current_principal(token).await?;
    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentUser missing from request extensions");
                ApiError::from(AuthError::MalformedToken)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request as HttpRequest;
    use chrono::Utc;
    use uuid::Uuid;

    fn test_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$04$unused".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_extractor_returns_inserted_user() {
        let user = test_user();
        let request = HttpRequest::builder()
            .uri("http://example.com")
            .extension(CurrentUser(user.clone()))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let extracted = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted.0.id, user.id);
        assert_eq!(extracted.0.email, user.email);
    }

    #[tokio::test]
    async fn test_extractor_rejects_when_missing() {
        let request = HttpRequest::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = CurrentUser::from_request_parts(&mut parts, &()).await;
        let err = result.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }
}

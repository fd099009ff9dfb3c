//! Authentication extractor
//!
//! Verifies the bearer token issued by the identity provider and trusts its
//! subject as the acting user.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use blog_common::{Claims, JwtService};
use blog_core::value_objects::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token subject
    pub user_id: UserId,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
            name: None,
        }
    }

    fn from_claims(claims: Claims) -> Result<Self, ApiError> {
        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::App(e)
        })?;

        Ok(Self {
            user_id,
            email: claims.email,
            name: claims.name,
        })
    }

    /// Verify a raw bearer token
    pub fn from_token(jwt: &JwtService, token: &str) -> Result<Self, ApiError> {
        let claims = jwt.validate_access_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::App(e)
        })?;
        Self::from_claims(claims)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        AuthUser::from_token(app_state.jwt_service(), bearer.token())
    }
}

/// Optional authenticated user
///
/// Returns None if no authorization header is present,
/// or an error if the token is invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// The viewer's id, if any
    pub fn user_id(&self) -> Option<UserId> {
        self.0.as_ref().map(|auth| auth.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match auth_result {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);
                let user = AuthUser::from_token(app_state.jwt_service(), bearer.token())?;
                Ok(OptionalAuthUser(Some(user)))
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}

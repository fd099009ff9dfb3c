//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod blogs;
pub mod comments;
pub mod health;
pub mod interactions;
pub mod taxonomy;
pub mod users;

use blog_service::UserService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Make sure the token's subject has an account before it writes anything.
///
/// Tokens carrying an email provision the account; others must already exist.
pub(crate) async fn ensure_account(state: &AppState, auth: &AuthUser) -> ApiResult<()> {
    UserService::new(state.service_context())
        .current_user(auth.user_id, auth.email.as_deref(), auth.name.as_deref())
        .await?;
    Ok(())
}

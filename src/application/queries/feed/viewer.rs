use super::FeedQueryService;
use crate::domain::feed::ViewerContext;

impl FeedQueryService {
    /// Turns an optional access token into a viewer. Never fails: any problem
    /// with the token means the request is served anonymously.
    pub async fn resolve_viewer(&self, access_token: Option<&str>) -> ViewerContext {
        let Some(token) = access_token.filter(|token| !token.is_empty()) else {
            return ViewerContext::Anonymous;
        };

        match self.token_manager.authenticate(token).await {
            Ok(user) => {
                tracing::info!(login = %user.login, "user authorized");
                ViewerContext::authenticated(user.login)
            }
            Err(err) => {
                tracing::debug!(error = %err, "ignoring unusable access token");
                ViewerContext::Anonymous
            }
        }
    }
}

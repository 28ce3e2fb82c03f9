use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;

use crate::error::WebError;

/// Authenticated caller of a protected route.
///
/// Built by [`require_auth`] for each request and handed to handlers through
/// request extensions; it lives exactly as long as the request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub actor: String,
}

pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    let Some(context) = token.and_then(|token| api_keys.authenticate(token)) else {
        tracing::warn!("Invalid API key attempt");
        return Err(WebError::Unauthorized);
    };

    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

/// Accepted API keys, each mapped to the actor name used in logs.
#[derive(Clone)]
pub struct ApiKeys {
    keys: HashMap<String, String>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(index, key)| (key.to_string(), format!("api-key-{}", index + 1)))
            .collect();

        Self { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn authenticate(&self, key: &str) -> Option<AuthContext> {
        self.keys.get(key).map(|actor| AuthContext {
            actor: actor.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_trims_keys() {
        let keys = ApiKeys::from_comma_separated(" alpha , ,beta,");
        assert!(keys.authenticate("alpha").is_some());
        assert!(keys.authenticate("beta").is_some());
        assert!(keys.authenticate("").is_none());
        assert!(keys.authenticate("gamma").is_none());
    }

    #[test]
    fn context_names_the_key_without_exposing_it() {
        let keys = ApiKeys::from_comma_separated("alpha,beta");
        let context = keys.authenticate("beta").expect("beta is configured");
        assert_eq!(context.actor, "api-key-2");
    }

    #[test]
    fn empty_configuration_rejects_everything() {
        let keys = ApiKeys::from_comma_separated("");
        assert!(keys.is_empty());
        assert!(keys.authenticate("anything").is_none());
    }
}

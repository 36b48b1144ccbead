use tracing::debug;

use crate::core::provider::RecordApi;
use crate::error::Error;

/// Account the token is scoped to. User-scoped tokens are rejected.
pub async fn resolve_account(api: &dyn RecordApi) -> Result<String, Error> {
    let identity = api.whoami().await?;
    match identity.account_id {
        Some(account) => {
            debug!(account = %account, user = ?identity.user_email, "resolved account");
            Ok(account)
        }
        None => Err(Error::UserToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::MockRecordApi;
    use crate::core::record::Identity;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_account_token_resolves() {
        let mut api = MockRecordApi::new();
        api.expect_whoami().times(1).returning(|| {
            Ok(Identity {
                account_id: Some("1010".into()),
                user_email: None,
            })
        });
        assert_eq!(resolve_account(&api).await.unwrap(), "1010");
    }

    #[tokio::test]
    async fn test_user_token_rejected() {
        let mut api = MockRecordApi::new();
        api.expect_whoami().returning(|| {
            Ok(Identity {
                account_id: None,
                user_email: Some("someone@example.com".into()),
            })
        });
        assert_matches!(resolve_account(&api).await, Err(Error::UserToken));
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces() {
        let mut api = MockRecordApi::new();
        api.expect_whoami()
            .returning(|| Err(Error::Transport("connection refused".into())));
        assert_matches!(resolve_account(&api).await, Err(Error::Transport(_)));
    }
}

//! Accounts sub-client.

use crate::client::ProjectXClient;
use crate::domain::account::wire::AccountSearchRequest;
use crate::domain::account::Account;
use crate::error::SdkError;

pub struct Accounts<'a> {
    pub(crate) client: &'a ProjectXClient,
}

impl<'a> Accounts<'a> {
    pub async fn search(&self, only_active: bool) -> Result<Vec<Account>, SdkError> {
        let request = AccountSearchRequest {
            only_active_accounts: only_active,
        };
        let resp = self.client.http.search_accounts(&request).await?;
        Ok(resp.accounts.into_iter().map(Account::from).collect())
    }

    /// Accounts the server reports as active. May be empty.
    pub async fn active(&self) -> Result<Vec<Account>, SdkError> {
        self.search(true).await
    }
}

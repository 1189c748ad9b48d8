//! Contracts sub-client — search and active-contract resolution.

use crate::client::ProjectXClient;
use crate::domain::contract::wire::ContractSearchRequest;
use crate::domain::contract::{rank, Contract};
use crate::error::SdkError;
use crate::shared::ContractId;

/// Sub-client for contract operations.
pub struct Contracts<'a> {
    pub(crate) client: &'a ProjectXClient,
}

impl<'a> Contracts<'a> {
    /// Free-text instrument search.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Contract>, SdkError> {
        let request = ContractSearchRequest {
            search_text: keyword.to_string(),
            live: self.client.settings.live,
        };
        let resp = self.client.http.search_contracts(&request).await?;
        Ok(resp.contracts.into_iter().map(Contract::from).collect())
    }

    /// Resolve `keyword` to the top-ranked active contract whose id contains
    /// `target_symbol`.
    ///
    /// Fails with [`SdkError::NotFound`] when the search is empty or no
    /// active contract matches the symbol.
    pub async fn resolve_contract(
        &self,
        keyword: &str,
        target_symbol: &str,
    ) -> Result<Contract, SdkError> {
        let contracts = self.search(keyword).await?;
        if contracts.is_empty() {
            return Err(SdkError::NotFound(format!(
                "No contracts match keyword '{}'",
                keyword
            )));
        }

        tracing::info!(keyword, count = contracts.len(), "Contract search results");
        for (i, c) in contracts.iter().enumerate() {
            tracing::debug!(
                index = i + 1,
                id = %c.id,
                name = %c.name,
                active = c.active_contract,
                description = %c.description,
                "Search result"
            );
        }

        let candidates = rank::candidates(&contracts, target_symbol);
        if candidates.is_empty() {
            return Err(SdkError::NotFound(format!(
                "No active contract with '{}' in its id",
                target_symbol
            )));
        }

        tracing::info!(target_symbol, count = candidates.len(), "Contract candidates");
        for (i, c) in candidates.iter().enumerate() {
            tracing::debug!(
                index = i + 1,
                id = %c.id,
                name = %c.name,
                description = %c.description,
                "Candidate"
            );
        }

        let best = rank::rank(candidates)
            .into_iter()
            .next()
            .cloned()
            .ok_or_else(|| SdkError::NotFound(target_symbol.to_string()))?;

        tracing::info!(id = %best.id, description = %best.description, "Selected contract");
        Ok(best)
    }

    /// Id-only form of [`resolve_contract`](Self::resolve_contract).
    pub async fn resolve(
        &self,
        keyword: &str,
        target_symbol: &str,
    ) -> Result<ContractId, SdkError> {
        Ok(self.resolve_contract(keyword, target_symbol).await?.id)
    }
}

//! Account endpoints
//!
//! Accounts, their deposit addresses and their transaction history.

use coinbase_types::{
    Account, Accounts, Address, Addresses, CreateAddress, Data, Transaction, Transactions,
};
use tracing::{debug, instrument};

use crate::client::CoinbaseClient;
use crate::endpoints::{path_segment, ListParams};
use crate::error::RestResult;
use crate::request::NO_PARAMS;

/// Account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a CoinbaseClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a CoinbaseClient) -> Self {
        Self { client }
    }

    /// List accounts
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> RestResult<Accounts> {
        let accounts: Accounts = self.client.get("v2/accounts", Some(params)).await?;
        debug!("Fetched {} accounts", accounts.len());
        Ok(accounts)
    }

    /// Get one account
    ///
    /// # Arguments
    /// * `account_id` - Account id, or `primary` for the primary account
    #[instrument(skip(self))]
    pub async fn get(&self, account_id: &str) -> RestResult<Account> {
        let path = format!("v2/accounts/{}", path_segment("account id", account_id)?);
        let response: Data<Account> = self.client.get(&path, NO_PARAMS).await?;
        Ok(response.into_inner())
    }

    /// List addresses of an account
    #[instrument(skip(self))]
    pub async fn list_addresses(
        &self,
        account_id: &str,
        params: &ListParams,
    ) -> RestResult<Addresses> {
        let path = format!(
            "v2/accounts/{}/addresses",
            path_segment("account id", account_id)?
        );
        self.client.get(&path, Some(params)).await
    }

    /// Create a new deposit address
    ///
    /// Addresses can be used once; create a fresh one per deposit.
    #[instrument(skip(self))]
    pub async fn create_address(
        &self,
        account_id: &str,
        params: &CreateAddress,
    ) -> RestResult<Address> {
        let path = format!(
            "v2/accounts/{}/addresses",
            path_segment("account id", account_id)?
        );
        let response: Data<Address> = self.client.post(&path, Some(params)).await?;
        Ok(response.into_inner())
    }

    /// List transactions of an account
    #[instrument(skip(self))]
    pub async fn list_transactions(
        &self,
        account_id: &str,
        params: &ListParams,
    ) -> RestResult<Transactions> {
        let path = format!(
            "v2/accounts/{}/transactions",
            path_segment("account id", account_id)?
        );
        let transactions: Transactions = self.client.get(&path, Some(params)).await?;
        debug!("Fetched {} transactions", transactions.len());
        Ok(transactions)
    }

    /// Get one transaction
    #[instrument(skip(self))]
    pub async fn get_transaction(
        &self,
        account_id: &str,
        transaction_id: &str,
    ) -> RestResult<Transaction> {
        let path = format!(
            "v2/accounts/{}/transactions/{}",
            path_segment("account id", account_id)?,
            path_segment("transaction id", transaction_id)?
        );
        let response: Data<Transaction> = self.client.get(&path, NO_PARAMS).await?;
        Ok(response.into_inner())
    }
}

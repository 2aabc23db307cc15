use crate::middleware::Validated;
use crate::validation::{Schema, schemas};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    #[schema(example = "BTC")]
    pub coin: String,
    pub amount: f64,
    pub network: String,
    pub tx_hash: Option<String>,
}

impl Validated for DepositRequest {
    fn schema() -> &'static Schema {
        &schemas::DEPOSIT
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WithdrawalRequest {
    pub coin: String,
    pub amount: f64,
    pub address: String,
    pub network: String,
}

impl Validated for WithdrawalRequest {
    fn schema() -> &'static Schema {
        &schemas::WITHDRAWAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Trade,
    Transfer,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
    All,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionQuery {
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub status: Option<TransactionStatus>,
    pub limit: Option<u64>,
}

impl Validated for TransactionQuery {
    fn schema() -> &'static Schema {
        &schemas::TRANSACTION_QUERY
    }
}

//! Wire types for contract search.

use crate::shared::serde_util::null_as_empty;
use crate::shared::ContractId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `POST /Contract/search` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSearchRequest {
    pub search_text: String,
    pub live: bool,
}

/// A single contract as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractResponse {
    pub id: ContractId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tick_size: Option<Decimal>,
    #[serde(default)]
    pub tick_value: Option<Decimal>,
    #[serde(default)]
    pub active_contract: bool,
}

/// `POST /Contract/search` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractsResponse {
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub contracts: Vec<ContractResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contracts_response_parses_backend_shape() {
        let json = r#"{
            "contracts": [{
                "id": "CON.F.US.ENQ.M25",
                "name": "ENQM25",
                "description": "E-mini NASDAQ-100: June 2025",
                "tickSize": 0.25,
                "tickValue": 5.0,
                "activeContract": true
            }],
            "success": true,
            "errorCode": 0,
            "errorMessage": null
        }"#;
        let resp: ContractsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.contracts.len(), 1);
        let c = &resp.contracts[0];
        assert_eq!(c.id.as_str(), "CON.F.US.ENQ.M25");
        assert!(c.active_contract);
        assert_eq!(c.tick_size, Some(Decimal::new(25, 2)));
    }

    #[test]
    fn test_null_contracts_is_empty() {
        let resp: ContractsResponse =
            serde_json::from_str(r#"{"contracts":null,"success":true}"#).unwrap();
        assert!(resp.contracts.is_empty());
    }

    #[test]
    fn test_search_request_wire_names() {
        let req = ContractSearchRequest {
            search_text: "NQ".to_string(),
            live: false,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "searchText": "NQ", "live": false })
        );
    }
}

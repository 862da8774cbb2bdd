use crate::errors::{ValidationError, UNKNOWN_ROUTING_MSG};
use crate::types::Verdict;
use serde::{Deserialize, Serialize};

/// **The body of a `POST /validate` request**
///
/// Both fields are required, but they are optional here so that their
/// absence is reported by validation, with its own message.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    #[serde(default)]
    pub routing_number: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
}

impl ValidationRequest {
    pub fn new(routing_number: &str, account_number: &str) -> Self {
        ValidationRequest {
            routing_number: Some(routing_number.to_string()),
            account_number: Some(account_number.to_string()),
        }
    }
}

/// **The body of every `POST /validate` response**
///
/// `valid` is `true` only when the routing number was found.
/// Keys without a value are left out.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ValidationResponse {
    pub fn valid(bank_name: String, address: String) -> Self {
        ValidationResponse {
            valid: true,
            message: None,
            bank_name: Some(bank_name),
            address: Some(address),
        }
    }

    pub fn invalid(message: &str) -> Self {
        ValidationResponse {
            valid: false,
            message: Some(message.to_string()),
            bank_name: None,
            address: None,
        }
    }
}

impl From<Verdict> for ValidationResponse {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Valid {
                bank_name,
                display_address,
            } => ValidationResponse::valid(bank_name, display_address),
            Verdict::Unknown => ValidationResponse::invalid(UNKNOWN_ROUTING_MSG),
        }
    }
}

impl From<ValidationError> for ValidationResponse {
    fn from(err: ValidationError) -> Self {
        ValidationResponse::invalid(err.message())
    }
}

/// **The body of a `GET /health` response**
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HealthResponse {
    pub ready: bool,
    pub banks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_camel_case_keys() {
        let request: ValidationRequest = serde_json::from_value(json!({
            "routingNumber": "021000021",
            "accountNumber": "12345678"
        }))
        .unwrap();

        assert_eq!(request.routing_number.as_deref(), Some("021000021"));
        assert_eq!(request.account_number.as_deref(), Some("12345678"));
    }

    #[test]
    fn request_fields_may_be_absent() {
        let request: ValidationRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.routing_number.is_none());
        assert!(request.account_number.is_none());
    }

    #[test]
    fn valid_response_omits_message() {
        let response = ValidationResponse::from(Verdict::Valid {
            bank_name: "JPMORGAN CHASE".to_string(),
            display_address: "1 Chase Plaza, New York, NY".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "valid": true,
                "bankName": "JPMORGAN CHASE",
                "address": "1 Chase Plaza, New York, NY"
            })
        );
    }

    #[test]
    fn unknown_response_carries_only_message() {
        let response = ValidationResponse::from(Verdict::Unknown);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "valid": false, "message": "Invalid routing number." })
        );
    }

    #[test]
    fn error_response_carries_error_message() {
        let response = ValidationResponse::from(ValidationError::NotReady);
        assert_eq!(
            response.message.as_deref(),
            Some("Server still loading data. Try again.")
        );
        assert!(!response.valid);
    }
}

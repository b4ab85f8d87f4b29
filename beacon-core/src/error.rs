use serde::{Deserialize, Serialize};

/// An in-band protocol error carried inside a response.
///
/// These are values, not `Err` results: a dataset that cannot be searched
/// still produces a well-formed response with `error` populated. Callers
/// branch on `error_code` (400 invalid request/assembly, 404 unknown
/// dataset, 500 empty catalog); the message is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconError {
    pub error_code: u16,
    pub error_message: String,
}

impl BeaconError {
    pub fn new(error_code: u16, error_message: impl Into<String>) -> Self {
        Self {
            error_code,
            error_message: error_message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_with_protocol_field_names() {
        let error = BeaconError::new(404, "Could not find dataset with id: ds9");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "errorCode": 404,
                "errorMessage": "Could not find dataset with id: ds9",
            })
        );
    }
}

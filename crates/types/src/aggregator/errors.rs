//! Error types for aggregator operations

use thiserror::Error;

/// Failures talking to the bridge aggregator
#[derive(Error, Debug)]
pub enum AggregatorError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// Non-success status; the raw body is kept for diagnostics
	#[error("Aggregator returned HTTP {status}: {body}")]
	HttpStatus { status: u16, body: String },

	#[error("Malformed aggregator response: {reason}")]
	MalformedResponse { reason: String },
}

impl AggregatorError {
	/// HTTP status code of the failure, if one applies
	pub fn status_code(&self) -> Option<u16> {
		match self {
			AggregatorError::HttpStatus { status, .. } => Some(*status),
			AggregatorError::Http(err) => err.status().map(|s| s.as_u16()),
			_ => None,
		}
	}
}

pub type AggregatorResult<T> = Result<T, AggregatorError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_code_extraction() {
		let error = AggregatorError::HttpStatus {
			status: 500,
			body: "{\"errorMessage\":\"no route\"}".to_string(),
		};
		assert_eq!(error.status_code(), Some(500));
		assert!(error.to_string().contains("no route"));

		let error = AggregatorError::MalformedResponse {
			reason: "missing estimation".to_string(),
		};
		assert_eq!(error.status_code(), None);
	}
}

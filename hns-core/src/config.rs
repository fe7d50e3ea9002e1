//! Decoder configuration

use crate::{CodecError, CodecResult};
use serde::{Deserialize, Serialize};

/// Limits applied while decoding untrusted input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeConfig {
    /// Maximum number of transactions accepted in one block.
    /// `None` leaves the count unbounded, as the node does.
    pub max_transactions: Option<u64>,
}

impl DecodeConfig {
    /// Create an unbounded configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum transaction count
    pub fn with_max_transactions(mut self, max: u64) -> Self {
        self.max_transactions = Some(max);
        self
    }

    /// Parse a TOML document such as `max_transactions = 10000`
    pub fn from_toml_str(s: &str) -> CodecResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| CodecError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CodecResult<()> {
        if self.max_transactions == Some(0) {
            return Err(CodecError::Config(
                "max_transactions must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Check a decoded transaction count against the limit
    pub fn check_transaction_count(&self, count: u64) -> CodecResult<()> {
        match self.max_transactions {
            Some(max) if count > max => Err(CodecError::TooManyTransactions { count, max }),
            _ => Ok(()),
        }
    }
}

//! Command implementations

use crate::cli::{Command, Opt};
use anyhow::{Context, Result};
use hns_core::encoding::read_varint;
use hns_core::{
    create_blind, hash_name, Address, BlockHeader, Decodable, DecodeConfig, Encodable, Hash,
    BLIND_NONCE_SIZE,
};
use serde::Serialize;
use std::fs;
use tracing::{debug, info};

/// Result of `blind`
#[derive(Debug, Serialize)]
pub struct BlindOutput {
    pub value: u64,
    pub nonce: String,
    pub blind: Hash,
}

/// Result of `inspect-block`
#[derive(Debug, Serialize)]
pub struct BlockSummary {
    pub header: BlockHeader,
    pub transaction_count: u64,
    /// Bytes left after the count, holding the encoded transactions
    pub transaction_bytes: usize,
}

/// Build the decoder configuration from the config file and flags
pub fn load_config(opt: &Opt) -> Result<DecodeConfig> {
    let mut config = match &opt.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            DecodeConfig::from_toml_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => DecodeConfig::default(),
    };

    if let Some(max) = opt.max_transactions {
        config = config.with_max_transactions(max);
    }
    config.validate()?;
    debug!(?config, "loaded decode config");
    Ok(config)
}

/// Run one command and return what should be printed
pub fn run(command: Command, config: &DecodeConfig) -> Result<String> {
    match command {
        Command::HashName { name } => Ok(hash_name(&name).to_hex()),
        Command::Blind { value, nonce } => {
            let output = blind(value, nonce.as_deref())?;
            Ok(serde_json::to_string_pretty(&output)?)
        }
        Command::EncodeAddress { version, hash } => {
            let hash = hex::decode(hash.trim()).context("invalid address hash hex")?;
            let addr = Address::new(version, hash);
            Ok(addr.to_hex()?)
        }
        Command::DecodeAddress { hex } => {
            let addr = Address::from_hex(&hex).context("failed to decode address")?;
            Ok(serde_json::to_string_pretty(&addr)?)
        }
        Command::DecodeHeader { hex } => {
            let header =
                BlockHeader::from_hex(&hex).context("failed to decode block header")?;
            Ok(serde_json::to_string_pretty(&header)?)
        }
        Command::InspectBlock { hex } => {
            let summary = inspect_block(&hex, config)?;
            Ok(serde_json::to_string_pretty(&summary)?)
        }
        Command::NetworkPort { network } => Ok(network.rpc_port().to_string()),
    }
}

/// Seal `value` under the given nonce, or under a fresh random one
pub fn blind(value: u64, nonce: Option<&str>) -> Result<BlindOutput> {
    let nonce = match nonce {
        Some(hex_str) => hex::decode(hex_str.trim()).context("invalid nonce hex")?,
        None => {
            info!("generating random blind nonce");
            rand::random::<[u8; BLIND_NONCE_SIZE]>().to_vec()
        }
    };
    let blind = create_blind(value, &nonce)?;
    Ok(BlindOutput {
        value,
        nonce: hex::encode(&nonce),
        blind,
    })
}

/// Decode the header and transaction count of a raw block.
///
/// Transactions themselves are left undecoded.
pub fn inspect_block(hex_str: &str, config: &DecodeConfig) -> Result<BlockSummary> {
    let bytes = hex::decode(hex_str.trim()).context("invalid block hex")?;
    let mut cursor = bytes.as_slice();

    let header = BlockHeader::decode(&mut cursor)
        .context("failed to decode block header")?;
    let transaction_count = read_varint(&mut cursor)
        .context("failed to read transaction count")?;
    config.check_transaction_count(transaction_count)?;

    Ok(BlockSummary {
        header,
        transaction_count,
        transaction_bytes: cursor.len(),
    })
}

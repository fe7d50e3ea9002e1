//! Command-line definitions

use clap::{Parser, Subcommand};
use hns_core::Network;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "hns",
    version,
    about = "Inspect Handshake canonical bytes and auction hashes"
)]
pub struct Opt {
    /// TOML file with decoder limits
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject blocks carrying more transactions than this
    #[arg(long, global = true, env = "HNS_MAX_TRANSACTIONS")]
    pub max_transactions: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "hash-name", about = "Hash a name into its auction lookup key")]
    HashName {
        #[arg(help = "The name to hash")]
        name: String,
    },
    #[command(about = "Create a sealed-bid blind")]
    Blind {
        #[arg(help = "Bid value in dollarydoos")]
        value: u64,
        #[arg(long, help = "32-byte hex nonce; a random one is generated if omitted")]
        nonce: Option<String>,
    },
    #[command(name = "encode-address", about = "Encode an address to canonical hex")]
    EncodeAddress {
        #[arg(help = "Address version")]
        version: u8,
        #[arg(help = "Address hash as hex")]
        hash: String,
    },
    #[command(name = "decode-address", about = "Decode canonical address hex")]
    DecodeAddress {
        #[arg(help = "Canonical address bytes as hex")]
        hex: String,
    },
    #[command(name = "decode-header", about = "Decode a 236-byte block header")]
    DecodeHeader {
        #[arg(help = "Canonical header bytes as hex")]
        hex: String,
    },
    #[command(
        name = "inspect-block",
        about = "Decode the header and transaction count of a raw block"
    )]
    InspectBlock {
        #[arg(help = "Raw block bytes as hex")]
        hex: String,
    },
    #[command(name = "network-port", about = "Print the default RPC port of a network")]
    NetworkPort {
        #[arg(help = "mainnet, testnet, regtest or simnet")]
        network: Network,
    },
}

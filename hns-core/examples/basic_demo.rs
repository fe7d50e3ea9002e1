//! Example demonstrating the core codec and commitment functions

use hns_core::{
    create_blind, hash_name, verify_blind, Address, BlockHeader, Decodable, Encodable, Hash,
    Network,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Handshake Core Demo");
    println!("===================");

    println!("\n1. Encoding an address...");
    let addr = Address::new(0, vec![0x5a; 20]);
    let addr_hex = addr.to_hex()?;
    println!("   Canonical bytes: {}", addr_hex);
    let decoded = Address::from_hex(&addr_hex)?;
    println!(
        "   Decoded version {} with {}-byte hash",
        decoded.version,
        decoded.hash.len()
    );

    println!("\n2. Encoding a block header...");
    let header = BlockHeader {
        time: 1_580_745_078,
        hash: Hash::new([0x11; 32]),
        bits: 0x1c00ffff,
        ..BlockHeader::default()
    };
    let header_bytes = header.to_bytes()?;
    println!("   Header is {} bytes", header_bytes.len());
    assert_eq!(BlockHeader::from_bytes(&header_bytes)?, header);

    println!("\n3. Hashing a name...");
    println!("   hash_name(\"handshake\") = {}", hash_name("handshake"));

    println!("\n4. Sealing a bid...");
    let nonce = [0x42u8; 32];
    let blind = create_blind(1_000_000, &nonce)?;
    println!("   Blind: {}", blind);
    let opens = verify_blind(&blind, 1_000_000, &nonce)?;
    println!("   Opens with same value: {}", opens);

    println!("\n5. Network ports...");
    for network in Network::ALL {
        println!("   {:<8} {}", network, network.rpc_port());
    }

    Ok(())
}

//! Packet shapes for both sides of the bridge.
//!
//! `java` holds the packets exchanged with the authoritative server, `bedrock`
//! the ones exchanged with the client. Inside each, `client` is clientbound and
//! `server` is serverbound, from the point of view of that protocol. Encoding
//! is left to the transport; this crate only describes the packets.

pub mod bedrock;
pub mod java;

/// Java protocol the packet ids in [`java`] belong to.
pub const JAVA_PROTOCOL_VERSION: i32 = 769;

/// Bedrock protocol the packet ids in [`bedrock`] belong to.
pub const BEDROCK_PROTOCOL_VERSION: i32 = 766;

pub trait Packet {
    const PACKET_ID: i32;
}

/// Outbound queue towards the Java server. Sending never blocks.
pub trait JavaSink: Send {
    fn send_java(&mut self, packet: java::server::Serverbound);
}

/// Outbound queue towards the Bedrock client. Sending never blocks.
pub trait BedrockSink: Send {
    fn send_bedrock(&mut self, packet: bedrock::client::Clientbound);
}

impl JavaSink for Vec<java::server::Serverbound> {
    fn send_java(&mut self, packet: java::server::Serverbound) {
        self.push(packet);
    }
}

impl BedrockSink for Vec<bedrock::client::Clientbound> {
    fn send_bedrock(&mut self, packet: bedrock::client::Clientbound) {
        self.push(packet);
    }
}

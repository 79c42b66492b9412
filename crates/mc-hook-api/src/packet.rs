//! Packet events.
//!
//! Receive events are fired from the network I/O thread, not the main loop.

use bytes::Bytes;

use crate::types::PlayerInfo;
use crate::Cancellable;

/// An encoded game packet: numeric id plus raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub id: u32,
    pub payload: Bytes,
}

impl Packet {
    pub fn new(id: u32, payload: Bytes) -> Self {
        Self { id, payload }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketDirection {
    /// Server to client.
    Send,
    /// Client to server.
    Receive,
}

hook_event! {
    /// The server is about to send a packet to a player.
    PacketSendPre / PacketSendPost {
        fixed {
            player: PlayerInfo,
            packet: Packet,
        }
        mutable {}
    }
}

hook_event! {
    /// The server received a packet from a player.
    PacketReceivePre / PacketReceivePost {
        fixed {
            player: PlayerInfo,
            packet: Packet,
        }
        mutable {}
    }
}

impl PacketSendPre {
    pub const DIRECTION: PacketDirection = PacketDirection::Send;
}

impl PacketReceivePre {
    pub const DIRECTION: PacketDirection = PacketDirection::Receive;
}

/// Pre events that carry a packet, for per-packet-id listeners.
pub trait PacketEvent: Cancellable {
    fn direction() -> PacketDirection
    where
        Self: Sized;

    fn packet_id(&self) -> u32;
}

impl PacketEvent for PacketSendPre {
    fn direction() -> PacketDirection {
        Self::DIRECTION
    }

    fn packet_id(&self) -> u32 {
        self.packet.id
    }
}

impl PacketEvent for PacketReceivePre {
    fn direction() -> PacketDirection {
        Self::DIRECTION
    }

    fn packet_id(&self) -> u32 {
        self.packet.id
    }
}

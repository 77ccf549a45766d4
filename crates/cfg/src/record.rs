//! Decoded records: the assembler's output shape.
//!
//! One [`GlobalConfig`] for the `config setup` section, and one
//! [`ConnectionRecord`] per `conn` section. A connection's `left`/`right`
//! keywords decode into two symmetric [`EndpointRecord`]s (`this`/`that`)
//! rather than a single record addressed by a runtime side flag, so a
//! fully-assembled connection can never observe an endpoint slot that was
//! never set for that side.

use foldhash::HashMap;

use crate::decode::DecodedValue;
use crate::slot::{KbfSlot, KncfSlot, KscfSlot, KsfSlot};

#[derive(Clone, Debug, Default)]
pub struct GlobalConfig {
    pub numbers: HashMap<KbfSlot, DecodedValue>,
    pub strings: HashMap<KsfSlot, DecodedValue>,
}

impl GlobalConfig {
    pub fn number(&self, slot: KbfSlot) -> Option<&DecodedValue> {
        self.numbers.get(&slot)
    }

    pub fn string(&self, slot: KsfSlot) -> Option<&DecodedValue> {
        self.strings.get(&slot)
    }
}

/// Per-endpoint values: everything a `left*`/`right*` keyword can address.
#[derive(Clone, Debug, Default)]
pub struct EndpointRecord {
    pub strings: HashMap<KscfSlot, DecodedValue>,
}

impl EndpointRecord {
    pub fn get(&self, slot: KscfSlot) -> Option<&DecodedValue> {
        self.strings.get(&slot)
    }
}

/// A fully assembled `conn` section: the shared, non-leftright keywords
/// plus the two resolved endpoints.
#[derive(Clone, Debug, Default)]
pub struct ConnectionRecord {
    pub name: String,
    pub numbers: HashMap<KncfSlot, DecodedValue>,
    pub strings: HashMap<KscfSlot, DecodedValue>,
    pub this: EndpointRecord,
    pub that: EndpointRecord,
}

impl ConnectionRecord {
    pub fn new(name: impl Into<String>) -> Self {
        ConnectionRecord { name: name.into(), ..Default::default() }
    }

    pub fn number(&self, slot: KncfSlot) -> Option<&DecodedValue> {
        self.numbers.get(&slot)
    }

    pub fn string(&self, slot: KscfSlot) -> Option<&DecodedValue> {
        self.strings.get(&slot)
    }
}

/// The fully parsed `ipsec.conf` file: the global section plus every
/// connection, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct ConfigFile {
    pub config_setup: GlobalConfig,
    pub connections: Vec<ConnectionRecord>,
}

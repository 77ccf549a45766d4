//! The state registry: one arena of in-progress/established IKE/IPsec
//! negotiations, kept searchable along five independent axes at once
//! (serial order, owning connection, reqid, initiator SPI alone, and the
//! full SPI pair). Grounded on the original's five `HASH_TABLE` index
//! definitions over a single array of states.
//!
//! The registry owns its own serial counter (each `StateRegistry` starts
//! fresh at 1) rather than pulling from a process-global, so tests can
//! construct independent registries without interfering with each other.
//!
//! A state is allocated in two steps, mirroring the original's
//! `alloc_state`/`add_state_to_db` split: [`StateRegistry::alloc`] reserves
//! a serial number before the negotiation's cookies are necessarily known,
//! and [`StateRegistry::insert`] files the (now fully keyed) state into all
//! applicable indexes. As more key material becomes known over the life of
//! a negotiation (a reqid assigned, a responder SPI learned), the
//! `rehash_*` methods move the state's entry in the relevant index without
//! disturbing the others.

mod filter;

pub use filter::{IterationOrder, StateFilter};

use foldhash::HashMap;
use std::collections::BTreeMap;
use std::collections::HashSet;

/// An IKE SPI (a "cookie" in the original terminology): 8 bytes chosen by
/// one peer to name its half of a negotiation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IkeSpi(pub [u8; 8]);

/// The monotonically increasing handle every state is allocated under.
/// Iteration in serial order falls out of using this as the arena's key,
/// since serials are only ever handed out in increasing order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoSerial(pub u64);

/// The identification a state can be looked up by, independent of whatever
/// payload `T` the caller attaches to it.
#[derive(Clone, Debug)]
struct Keys {
    connection: String,
    reqid: Option<u32>,
    initiator_spi: IkeSpi,
    responder_spi: Option<IkeSpi>,
}

struct Entry<T> {
    keys: Keys,
    data: T,
}

/// A serial reserved by [`StateRegistry::alloc`] but not yet filed into any
/// index. Call [`StateRegistry::insert`] once the initiator SPI (and,
/// optionally, reqid/responder SPI) are known.
pub struct PendingState<T> {
    pub serialno: SoSerial,
    connection: String,
    data: T,
}

impl<T> PendingState<T> {
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

#[derive(Default)]
pub struct StateRegistry<T> {
    states: BTreeMap<SoSerial, Entry<T>>,
    by_connection: HashMap<String, HashSet<SoSerial>>,
    by_reqid: HashMap<u32, HashSet<SoSerial>>,
    by_initiator_spi: HashMap<IkeSpi, HashSet<SoSerial>>,
    by_spis: HashMap<(IkeSpi, IkeSpi), HashSet<SoSerial>>,
    next_serial: u64,
}

impl<T> StateRegistry<T> {
    pub fn new() -> Self {
        StateRegistry {
            states: BTreeMap::new(),
            by_connection: HashMap::default(),
            by_reqid: HashMap::default(),
            by_initiator_spi: HashMap::default(),
            by_spis: HashMap::default(),
            next_serial: 1,
        }
    }

    /// Reserve the next serial number for a new negotiation. The returned
    /// handle is not yet visible to any lookup until [`insert`](Self::insert).
    pub fn alloc(&mut self, connection: impl Into<String>, data: T) -> PendingState<T> {
        let serialno = SoSerial(self.next_serial);
        self.next_serial += 1;
        PendingState { serialno, connection: connection.into(), data }
    }

    /// File a pending state into the by-connection and by-initiator-SPI
    /// indexes (the two keys guaranteed known this early); reqid and the
    /// responder SPI are usually learned later via the `rehash_*` methods.
    pub fn insert(&mut self, pending: PendingState<T>, initiator_spi: IkeSpi) -> SoSerial {
        let serialno = pending.serialno;
        let keys = Keys {
            connection: pending.connection,
            reqid: None,
            initiator_spi,
            responder_spi: None,
        };
        self.by_connection.entry(keys.connection.clone()).or_default().insert(serialno);
        self.by_initiator_spi.entry(initiator_spi).or_default().insert(serialno);
        self.states.insert(serialno, Entry { keys, data: pending.data });
        serialno
    }

    pub fn get(&self, serialno: SoSerial) -> Option<&T> {
        self.states.get(&serialno).map(|e| &e.data)
    }

    pub fn get_mut(&mut self, serialno: SoSerial) -> Option<&mut T> {
        self.states.get_mut(&serialno).map(|e| &mut e.data)
    }

    pub fn by_serialno(&self, serialno: SoSerial) -> Option<&T> {
        self.get(serialno)
    }

    pub fn by_connection(&self, connection: &str) -> impl Iterator<Item = (SoSerial, &T)> {
        self.by_connection
            .get(connection)
            .into_iter()
            .flatten()
            .filter_map(move |serial| self.states.get(serial).map(|e| (*serial, &e.data)))
    }

    pub fn by_reqid(&self, reqid: u32) -> impl Iterator<Item = (SoSerial, &T)> {
        self.by_reqid
            .get(&reqid)
            .into_iter()
            .flatten()
            .filter_map(move |serial| self.states.get(serial).map(|e| (*serial, &e.data)))
    }

    pub fn by_initiator_spi(&self, spi: IkeSpi) -> impl Iterator<Item = (SoSerial, &T)> {
        self.by_initiator_spi
            .get(&spi)
            .into_iter()
            .flatten()
            .filter_map(move |serial| self.states.get(serial).map(|e| (*serial, &e.data)))
    }

    pub fn by_spis(&self, initiator: IkeSpi, responder: IkeSpi) -> impl Iterator<Item = (SoSerial, &T)> {
        self.by_spis
            .get(&(initiator, responder))
            .into_iter()
            .flatten()
            .filter_map(move |serial| self.states.get(serial).map(|e| (*serial, &e.data)))
    }

    /// Move `serialno` to a new reqid bucket, vacating its old one (if any).
    /// Called once the negotiation's reqid becomes known, or changes.
    pub fn rehash_reqid(&mut self, serialno: SoSerial, reqid: u32) {
        let Some(entry) = self.states.get_mut(&serialno) else { return };
        if let Some(old) = entry.keys.reqid.replace(reqid) {
            if let Some(bucket) = self.by_reqid.get_mut(&old) {
                bucket.remove(&serialno);
            }
        }
        self.by_reqid.entry(reqid).or_default().insert(serialno);
    }

    /// Move `serialno` to a new owning-connection bucket.
    pub fn rehash_connection(&mut self, serialno: SoSerial, connection: impl Into<String>) {
        let connection = connection.into();
        let Some(entry) = self.states.get_mut(&serialno) else { return };
        let old = std::mem::replace(&mut entry.keys.connection, connection.clone());
        if let Some(bucket) = self.by_connection.get_mut(&old) {
            bucket.remove(&serialno);
        }
        self.by_connection.entry(connection).or_default().insert(serialno);
    }

    /// Move `serialno` to a new initiator-SPI bucket. Also updates the
    /// combined-SPI index if a responder SPI is already known.
    pub fn rehash_initiator_spi(&mut self, serialno: SoSerial, spi: IkeSpi) {
        let Some(entry) = self.states.get_mut(&serialno) else { return };
        let old = std::mem::replace(&mut entry.keys.initiator_spi, spi);
        if let Some(bucket) = self.by_initiator_spi.get_mut(&old) {
            bucket.remove(&serialno);
        }
        self.by_initiator_spi.entry(spi).or_default().insert(serialno);
        if let Some(responder) = entry.keys.responder_spi {
            if let Some(bucket) = self.by_spis.get_mut(&(old, responder)) {
                bucket.remove(&serialno);
            }
            self.by_spis.entry((spi, responder)).or_default().insert(serialno);
        }
    }

    /// Record (or change) the responder SPI, filing `serialno` into the
    /// combined-SPI index for the first time or moving it within it.
    pub fn rehash_spis(&mut self, serialno: SoSerial, responder_spi: IkeSpi) {
        let Some(entry) = self.states.get_mut(&serialno) else { return };
        let initiator = entry.keys.initiator_spi;
        if let Some(old_responder) = entry.keys.responder_spi.replace(responder_spi) {
            if let Some(bucket) = self.by_spis.get_mut(&(initiator, old_responder)) {
                bucket.remove(&serialno);
            }
        }
        self.by_spis.entry((initiator, responder_spi)).or_default().insert(serialno);
    }

    /// Re-key a state whose negotiated cookies changed (rare: an
    /// IKEv1 Aggressive Mode fallback or similar cookie rewrite). Updates
    /// both the initiator-SPI and combined-SPI indexes in one step.
    pub fn rehash_cookies(&mut self, serialno: SoSerial, initiator_spi: IkeSpi, responder_spi: Option<IkeSpi>) {
        self.rehash_initiator_spi(serialno, initiator_spi);
        if let Some(responder_spi) = responder_spi {
            self.rehash_spis(serialno, responder_spi);
        }
    }

    /// Remove a state from every index and the arena itself.
    pub fn delete(&mut self, serialno: SoSerial) -> Option<T> {
        let entry = self.states.remove(&serialno)?;
        if let Some(bucket) = self.by_connection.get_mut(&entry.keys.connection) {
            bucket.remove(&serialno);
        }
        if let Some(reqid) = entry.keys.reqid {
            if let Some(bucket) = self.by_reqid.get_mut(&reqid) {
                bucket.remove(&serialno);
            }
        }
        if let Some(bucket) = self.by_initiator_spi.get_mut(&entry.keys.initiator_spi) {
            bucket.remove(&serialno);
        }
        if let Some(responder) = entry.keys.responder_spi {
            if let Some(bucket) = self.by_spis.get_mut(&(entry.keys.initiator_spi, responder)) {
                bucket.remove(&serialno);
            }
        }
        Some(entry.data)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Verify every secondary index agrees with the primary arena: no
    /// dangling serials, and every stored state appears in the index its
    /// keys say it should. Intended for test/debug use, not the hot path.
    pub fn check_consistency(&self) -> Result<(), String> {
        let check_bucket = |label: &str, bucket: &HashSet<SoSerial>| -> Result<(), String> {
            for serial in bucket {
                if !self.states.contains_key(serial) {
                    return Err(format!("{label}: dangling serial {}", serial.0));
                }
            }
            Ok(())
        };
        for bucket in self.by_connection.values() {
            check_bucket("by_connection", bucket)?;
        }
        for bucket in self.by_reqid.values() {
            check_bucket("by_reqid", bucket)?;
        }
        for bucket in self.by_initiator_spi.values() {
            check_bucket("by_initiator_spi", bucket)?;
        }
        for bucket in self.by_spis.values() {
            check_bucket("by_spis", bucket)?;
        }
        for (serial, entry) in &self.states {
            if !self.by_connection.get(&entry.keys.connection).is_some_and(|b| b.contains(serial)) {
                return Err(format!("serial {} missing from its connection bucket", serial.0));
            }
            if !self.by_initiator_spi.get(&entry.keys.initiator_spi).is_some_and(|b| b.contains(serial)) {
                return Err(format!("serial {} missing from its initiator-SPI bucket", serial.0));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spi(byte: u8) -> IkeSpi {
        IkeSpi([byte; 8])
    }

    #[test]
    fn independent_registries_start_at_serial_one() {
        let mut a: StateRegistry<()> = StateRegistry::new();
        let mut b: StateRegistry<()> = StateRegistry::new();
        assert_eq!(a.alloc("conn", ()).serialno, SoSerial(1));
        assert_eq!(a.alloc("conn", ()).serialno, SoSerial(2));
        assert_eq!(b.alloc("conn", ()).serialno, SoSerial(1));
    }

    #[test]
    fn insert_then_lookup_by_all_indexes() {
        let mut reg: StateRegistry<&'static str> = StateRegistry::new();
        let pending = reg.alloc("west-east", "payload");
        let serialno = reg.insert(pending, spi(1));
        reg.rehash_reqid(serialno, 42);
        reg.rehash_spis(serialno, spi(2));

        assert_eq!(reg.by_serialno(serialno), Some(&"payload"));
        assert_eq!(reg.by_connection("west-east").count(), 1);
        assert_eq!(reg.by_reqid(42).count(), 1);
        assert_eq!(reg.by_initiator_spi(spi(1)).count(), 1);
        assert_eq!(reg.by_spis(spi(1), spi(2)).count(), 1);
        assert!(reg.check_consistency().is_ok());
    }

    #[test]
    fn delete_clears_every_index() {
        let mut reg: StateRegistry<()> = StateRegistry::new();
        let pending = reg.alloc("conn", ());
        let serialno = reg.insert(pending, spi(9));
        reg.rehash_reqid(serialno, 1);
        reg.rehash_spis(serialno, spi(10));
        reg.delete(serialno);

        assert_eq!(reg.by_connection("conn").count(), 0);
        assert_eq!(reg.by_reqid(1).count(), 0);
        assert_eq!(reg.by_initiator_spi(spi(9)).count(), 0);
        assert_eq!(reg.by_spis(spi(9), spi(10)).count(), 0);
        assert!(reg.check_consistency().is_ok());
    }

    #[test]
    fn rehash_moves_between_buckets_without_orphaning() {
        let mut reg: StateRegistry<()> = StateRegistry::new();
        let pending = reg.alloc("conn-a", ());
        let serialno = reg.insert(pending, spi(1));
        reg.rehash_connection(serialno, "conn-b");

        assert_eq!(reg.by_connection("conn-a").count(), 0);
        assert_eq!(reg.by_connection("conn-b").count(), 1);
    }
}

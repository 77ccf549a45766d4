//! The peer identity tagged union.
//!
//! The original ID payload is a single type byte plus a variable-length
//! data blob, with several numeric/string interpretations multiplexed over
//! the same two fields and occasionally a null pointer standing in for "no
//! identity was carried, fall back to the IP address." We replace all of
//! that with a proper sum type: every payload kind gets its own variant
//! carrying its own already-decoded data, so a caller can never read a
//! `DerAsn1Dn` out of what was actually a `Fqdn`.

use std::net::{Ipv4Addr, Ipv6Addr};

/// A peer identity, as carried in an IKEv1 ID payload or implied by its
/// absence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdKind {
    Fqdn(String),
    UserFqdn(String),
    Ipv4Addr(Ipv4Addr),
    Ipv6Addr(Ipv6Addr),
    DerAsn1Dn(Vec<u8>),
    KeyId(Vec<u8>),
    /// An explicit `ID_NULL`: authentication proceeds without binding to
    /// any particular identity.
    Null,
    /// No ID payload was sent at all; the identity is implied by the
    /// certificate that follows, once verified.
    FromCert,
    /// No ID payload, and no certificate either: the caller falls back to
    /// matching on the peer's IP address alone.
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerId {
    pub kind: IdKind,
}

impl PeerId {
    pub fn new(kind: IdKind) -> Self {
        PeerId { kind }
    }

    /// Whether this identity still needs a certificate to be resolved into
    /// something connection-matching can use.
    pub fn needs_certificate(&self) -> bool {
        matches!(self.kind, IdKind::FromCert)
    }
}

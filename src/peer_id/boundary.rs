//! External collaborators the peer-ID resolver calls into but does not
//! implement itself.
//!
//! Matching a peer identity against the pool of configured connections
//! (scoring by subnet, `authby=`, etc.) and verifying an X.509 chain are
//! both substantial algorithms in their own right, and neither is part of
//! what this resolver is responsible for. Both are expressed as narrow
//! traits so the resolver can be exercised with a test double instead of a
//! real implementation.

use std::net::IpAddr;

use super::auth::{AuthBy, SaRole};
use super::id::PeerId;

/// An opaque handle to a configured connection, as returned by
/// [`ConnectionTable`]. The resolver never looks inside one; it only ever
/// hands it back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionHandle(pub String);

/// The outcome of [`ConnectionTable::refine_host_connection`]: a candidate
/// connection (if any matched), plus whether the caller should take the
/// peer's identity from its certificate rather than trust the candidate's
/// configured id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Refinement {
    pub candidate: Option<ConnectionHandle>,
    pub get_id_from_cert: bool,
}

/// The pool of configured connections, searched for the best match to a
/// resolved peer identity, and the per-connection bookkeeping the resolver
/// needs to decide whether to switch to it.
pub trait ConnectionTable {
    /// Refine `current` to the best-scoring connection for `peer`, arriving
    /// from `remote_addr`, that accepts at least one method in `allowed`.
    /// `candidate` is `None` if nothing scores better than `current`.
    fn refine_host_connection(
        &self,
        current: &ConnectionHandle,
        peer: &PeerId,
        remote_addr: IpAddr,
        allowed: AuthBy,
    ) -> Refinement;

    /// Whether `handle` was configured with `require-id-on-certificate=no`
    /// (`POLICY_ALLOW_NO_SAN`): a `CERT` payload is accepted without its SAN
    /// having to match the connection's peer id.
    fn allows_no_san(&self, handle: &ConnectionHandle) -> bool;

    /// Whether `handle`'s stored peer id still carries unresolved
    /// wildcards, making it eligible to be replaced by whatever the peer
    /// asserts.
    fn has_id_wildcards(&self, handle: &ConnectionHandle) -> bool;

    /// `handle`'s currently configured/stored peer id.
    fn stored_peer_id(&self, handle: &ConnectionHandle) -> PeerId;

    /// Whether `handle` is a template or group connection that must be
    /// instantiated before use, rather than used directly.
    fn is_template_or_group(&self, handle: &ConnectionHandle) -> bool;

    /// Instantiate the template/group `handle` against the peer's host
    /// address and resolved id, returning the new concrete connection.
    fn instantiate(&self, handle: &ConnectionHandle, remote_addr: IpAddr, peer: &PeerId) -> ConnectionHandle;
}

/// The subject identity recovered from a verified certificate chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedCerts {
    pub subject_dn: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertError(pub String);

/// X.509 chain verification, as supplied by the NSS/PKI layer.
pub trait CertMatcher {
    fn verify_chain(&self, der_chain: &[Vec<u8>]) -> Result<VerifiedCerts, CertError>;

    /// Match `certs`' SAN entries against `remote_id`, yielding the identity
    /// the certificate actually carries (`IdKind::None` if the cert carries
    /// no id more specific than what was already known). `Err` means the
    /// SAN did not match.
    fn match_end_cert_id(&self, certs: &VerifiedCerts, remote_id: &PeerId) -> Result<PeerId, CertError>;
}

/// Authenticator-payload verification (`oakley_auth`'s crypto half): hashing
/// is keyed off negotiated SKEYID material this crate does not model, and
/// public-key signature verification goes through NSS upstream, so both are
/// external collaborators exactly like [`CertMatcher`].
pub trait Authenticator {
    /// Hash the ID payload body under `role` (the *peer's* role in the SA:
    /// roles are flipped before calling, since we authenticate the other
    /// end).
    fn main_mode_hash(&self, role: SaRole, id_payload_body: &[u8]) -> Vec<u8>;

    /// Verify `signature` over `hash` using the peer's RSA public key and
    /// SHA-1, as negotiated for `OAKLEY_RSA_SIG`.
    fn verify_rsa_signature(&self, hash: &[u8], signature: &[u8]) -> Result<(), CertError>;
}

#[cfg(test)]
pub mod test_doubles {
    use super::*;
    use crate::peer_id::id::IdKind;
    use std::collections::HashMap;

    /// Per-connection bookkeeping [`StaticConnectionTable`] hands back for a
    /// handle, mirroring the fields the real refinement/SAN-matching logic
    /// would read off a `struct connection`.
    #[derive(Clone)]
    pub struct ConnectionProps {
        pub allows_no_san: bool,
        pub has_id_wildcards: bool,
        pub stored_peer_id: PeerId,
        pub is_template_or_group: bool,
    }

    impl Default for ConnectionProps {
        fn default() -> Self {
            ConnectionProps {
                allows_no_san: false,
                has_id_wildcards: false,
                stored_peer_id: PeerId::new(IdKind::None),
                is_template_or_group: false,
            }
        }
    }

    #[derive(Default)]
    pub struct StaticConnectionTable {
        pub matches: HashMap<String, ConnectionHandle>,
        pub props: HashMap<String, ConnectionProps>,
        pub get_id_from_cert: bool,
    }

    impl StaticConnectionTable {
        pub fn insert(&mut self, peer_key: impl Into<String>, handle: ConnectionHandle) {
            self.matches.insert(peer_key.into(), handle);
        }

        pub fn set_props(&mut self, handle: &ConnectionHandle, props: ConnectionProps) {
            self.props.insert(handle.0.clone(), props);
        }

        fn props_for(&self, handle: &ConnectionHandle) -> ConnectionProps {
            self.props.get(&handle.0).cloned().unwrap_or_default()
        }
    }

    fn peer_key(peer: &PeerId) -> String {
        format!("{:?}", peer.kind)
    }

    impl ConnectionTable for StaticConnectionTable {
        fn refine_host_connection(
            &self,
            _current: &ConnectionHandle,
            peer: &PeerId,
            _remote_addr: IpAddr,
            _allowed: AuthBy,
        ) -> Refinement {
            Refinement {
                candidate: self.matches.get(&peer_key(peer)).cloned(),
                get_id_from_cert: self.get_id_from_cert,
            }
        }

        fn allows_no_san(&self, handle: &ConnectionHandle) -> bool {
            self.props_for(handle).allows_no_san
        }

        fn has_id_wildcards(&self, handle: &ConnectionHandle) -> bool {
            self.props_for(handle).has_id_wildcards
        }

        fn stored_peer_id(&self, handle: &ConnectionHandle) -> PeerId {
            self.props_for(handle).stored_peer_id
        }

        fn is_template_or_group(&self, handle: &ConnectionHandle) -> bool {
            self.props_for(handle).is_template_or_group
        }

        fn instantiate(&self, handle: &ConnectionHandle, _remote_addr: IpAddr, _peer: &PeerId) -> ConnectionHandle {
            ConnectionHandle(format!("{}-instance", handle.0))
        }
    }

    #[derive(Default)]
    pub struct AlwaysVerifies {
        pub subject_dn: Vec<u8>,
        /// The identity `match_end_cert_id` reports the cert as carrying;
        /// `None` means `IdKind::None` ("cert matched, but adds nothing new").
        pub cert_id: Option<PeerId>,
        pub san_mismatch: bool,
    }

    impl CertMatcher for AlwaysVerifies {
        fn verify_chain(&self, der_chain: &[Vec<u8>]) -> Result<VerifiedCerts, CertError> {
            if der_chain.is_empty() {
                return Err(CertError("empty chain".into()));
            }
            Ok(VerifiedCerts { subject_dn: self.subject_dn.clone() })
        }

        fn match_end_cert_id(&self, _certs: &VerifiedCerts, _remote_id: &PeerId) -> Result<PeerId, CertError> {
            if self.san_mismatch {
                return Err(CertError("SAN did not match".into()));
            }
            Ok(self.cert_id.clone().unwrap_or_else(|| PeerId::new(IdKind::None)))
        }
    }
}

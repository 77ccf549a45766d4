//! The three IKEv1 peer-ID resolution entry points, plus the
//! `decode_peer_id`/auth-check pre-steps they share.

use std::net::{Ipv4Addr, Ipv6Addr};

use super::auth::{oakley_auth_permitted, AuthBy, OakleyAuthMethod};
use super::boundary::{CertMatcher, ConnectionHandle, ConnectionTable};
use super::error::PeerIdError;
use super::id::{IdKind, PeerId};

/// The outcome of resolving a main-mode responder's peer id: the identity
/// to use from here on, which connection to continue with, and whether the
/// caller must apply a stored-id update (and, if so, clear that
/// connection's "has id wildcards" flag).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedResponderConnection {
    pub peer: PeerId,
    pub connection: ConnectionHandle,
    pub switched: bool,
    /// If `Some`, the caller must overwrite `connection`'s stored peer id
    /// with this value, releasing its previous peer certificate handle.
    pub stored_id_update: Option<PeerId>,
}

/// The as-received IKEv1 ID payload, already split into its wire-level
/// type/data, but not yet interpreted as a [`PeerId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawIdPayload {
    Ipv4Addr(Ipv4Addr),
    Ipv6Addr(Ipv6Addr),
    Fqdn(Vec<u8>),
    UserFqdn(Vec<u8>),
    DerAsn1Dn(Vec<u8>),
    KeyId(Vec<u8>),
    Null,
}

/// Turn a raw ID payload (or its absence) into a [`PeerId`]. Shared by all
/// three entry points.
///
/// A missing ID payload is not itself an error: IKEv1 allows the peer to
/// omit it when its identity is to be taken from the certificate that
/// follows (`have_cert`), and some deployments omit both and expect the
/// address alone to carry the match.
pub fn decode_peer_id(raw: Option<RawIdPayload>, have_cert: bool) -> PeerId {
    let kind = match raw {
        Some(RawIdPayload::Ipv4Addr(addr)) => IdKind::Ipv4Addr(addr),
        Some(RawIdPayload::Ipv6Addr(addr)) => IdKind::Ipv6Addr(addr),
        Some(RawIdPayload::Fqdn(bytes)) => IdKind::Fqdn(String::from_utf8_lossy(&bytes).into_owned()),
        Some(RawIdPayload::UserFqdn(bytes)) => IdKind::UserFqdn(String::from_utf8_lossy(&bytes).into_owned()),
        Some(RawIdPayload::DerAsn1Dn(bytes)) => IdKind::DerAsn1Dn(bytes),
        Some(RawIdPayload::KeyId(bytes)) => IdKind::KeyId(bytes),
        Some(RawIdPayload::Null) => IdKind::Null,
        None if have_cert => IdKind::FromCert,
        None => IdKind::None,
    };
    PeerId::new(kind)
}

/// Resolve a `FromCert` identity into a concrete `DerAsn1Dn`, verifying the
/// chain along the way. Leaves every other identity untouched.
fn resolve_from_cert(
    peer: PeerId,
    der_chain: Option<&[Vec<u8>]>,
    cert_matcher: &impl CertMatcher,
) -> Result<PeerId, PeerIdError> {
    if !peer.needs_certificate() {
        return Ok(peer);
    }
    let chain = der_chain.ok_or(PeerIdError::NoCertificateToResolveIdentity)?;
    let verified = cert_matcher
        .verify_chain(chain)
        .map_err(|e| PeerIdError::CertVerificationFailed(e.0))?;
    Ok(PeerId::new(IdKind::DerAsn1Dn(verified.subject_dn)))
}

/// As initiator: the connection was already chosen before the exchange
/// began, so resolution is just "does the responder's asserted identity
/// match what we expected of this connection's peer", not a search.
pub fn ikev1_decode_peer_id_initiator(
    raw: Option<RawIdPayload>,
    cert_payload_sent: bool,
    der_chain: Option<&[Vec<u8>]>,
    method: OakleyAuthMethod,
    allowed: AuthBy,
    expected: &PeerId,
    cert_matcher: &impl CertMatcher,
) -> Result<PeerId, PeerIdError> {
    if !oakley_auth_permitted(method, allowed) {
        return Err(PeerIdError::AuthMethodNotPermitted);
    }
    let peer = decode_peer_id(raw, cert_payload_sent);
    let peer = resolve_from_cert(peer, der_chain, cert_matcher)?;
    if &peer != expected {
        return Err(PeerIdError::IdentityMismatch);
    }
    Ok(peer)
}

/// As main-mode responder: the peer's identity (and possibly certificate)
/// arrive before we know which configured connection this is. Resolve the
/// identity, ask the connection table to refine the current connection
/// against it, reconcile that against any certificate SAN, and decide
/// whether to switch connections.
///
/// `current` is the connection the IP address alone selected before the ID
/// payload arrived; `method` is translated to the matching `authby` bit
/// (only `PresharedKey` and `RsaSignature` are supported here — every other
/// OAKLEY auth method is refused, matching the upstream responder's
/// `bad_case` on anything else).
pub fn ikev1_decode_peer_id_main_mode_responder(
    raw: Option<RawIdPayload>,
    cert_payload_sent: bool,
    der_chain: Option<&[Vec<u8>]>,
    remote_addr: std::net::IpAddr,
    method: OakleyAuthMethod,
    current: &ConnectionHandle,
    conn_table: &impl ConnectionTable,
    cert_matcher: &impl CertMatcher,
) -> Result<ResolvedResponderConnection, PeerIdError> {
    let this_authby = match method {
        OakleyAuthMethod::PresharedKey => AuthBy::PSK,
        OakleyAuthMethod::RsaSignature => AuthBy::RSASIG,
        _ => return Err(PeerIdError::AuthMethodNotPermitted),
    };

    let peer = decode_peer_id(raw, cert_payload_sent);
    let refinement = conn_table.refine_host_connection(current, &peer, remote_addr, this_authby);

    // "going to switch?" — use whichever connection is in play for the
    // certificate check below, without committing to the switch yet.
    let effective = refinement.candidate.clone().unwrap_or_else(|| current.clone());

    let mut stored_id_update: Option<PeerId> = None;
    let mut cert_verified = false;

    if let Some(chain) = der_chain {
        let certs = cert_matcher.verify_chain(chain).map_err(|e| PeerIdError::CertVerificationFailed(e.0))?;
        cert_verified = true;

        if conn_table.allows_no_san(&effective) {
            if conn_table.stored_peer_id(&effective).kind == IdKind::FromCert {
                stored_id_update = Some(peer.clone());
            }
        } else {
            let effective_stored = conn_table.stored_peer_id(&effective);
            let remote_id = if effective_stored.kind == IdKind::FromCert
                || refinement.get_id_from_cert
                || conn_table.has_id_wildcards(&effective)
            {
                &peer
            } else {
                &effective_stored
            };
            let cert_id = cert_matcher
                .match_end_cert_id(&certs, remote_id)
                .map_err(|_| PeerIdError::CertSanMismatch)?;
            if cert_id.kind != IdKind::None {
                stored_id_update = Some(cert_id);
            } else if effective_stored.kind == IdKind::FromCert {
                stored_id_update = Some(peer.clone());
            }
        }
    }

    let connection = match refinement.candidate {
        Some(candidate) if candidate != *current => {
            if conn_table.is_template_or_group(&candidate) {
                conn_table.instantiate(&candidate, remote_addr, &peer)
            } else {
                candidate
            }
        }
        Some(candidate) => {
            // No switch: a wildcarded or cert-sourced stored id still gets
            // replaced with what the peer just asserted.
            if conn_table.has_id_wildcards(&candidate) || refinement.get_id_from_cert {
                if stored_id_update.is_none() {
                    stored_id_update = Some(peer.clone());
                }
            }
            candidate
        }
        None => {
            let fallback_stored = stored_id_update.clone().unwrap_or_else(|| conn_table.stored_peer_id(current));
            if !cert_verified && peer != fallback_stored && fallback_stored.kind != IdKind::FromCert {
                return Err(PeerIdError::IdentityMismatch);
            }
            current.clone()
        }
    };

    let switched = connection != *current;
    Ok(ResolvedResponderConnection { peer, connection, switched, stored_id_update })
}

/// The outcome of resolving an aggressive-mode responder's peer id: unlike
/// the main-mode case, the connection is pinned (aggressive mode carries
/// the ID in message 1, before any connection-switching machinery runs),
/// so there is no candidate connection or switch decision, only whether the
/// certificate gave the caller an alternate id to store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAggrResponderId {
    pub peer: PeerId,
    /// Mirrors `st_v1_aggr_mode_responder_found_peer_id`: true once a
    /// verified certificate has been processed, so the main-mode-style
    /// re-check this same state would otherwise trigger is skipped.
    pub found_peer_id: bool,
    pub stored_id_update: Option<PeerId>,
}

/// As aggressive-mode responder: the connection was already pinned by the
/// time the ID arrives (aggressive mode carries it in message 1), so
/// resolution omits the refine-and-switch machinery entirely and only
/// narrows a `FROMCERT`/wildcarded stored id against the certificate, the
/// way the upstream responder does.
pub fn ikev1_decode_peer_id_aggr_mode_responder(
    raw: Option<RawIdPayload>,
    cert_payload_sent: bool,
    der_chain: Option<&[Vec<u8>]>,
    current: &ConnectionHandle,
    conn_table: &impl ConnectionTable,
    cert_matcher: &impl CertMatcher,
) -> Result<ResolvedAggrResponderId, PeerIdError> {
    let peer = decode_peer_id(raw, cert_payload_sent);

    let mut stored_id_update = None;
    if conn_table.stored_peer_id(current).kind == IdKind::FromCert {
        stored_id_update = Some(peer.clone());
    }

    let mut found_peer_id = false;
    if let Some(chain) = der_chain {
        let certs = cert_matcher.verify_chain(chain).map_err(|e| PeerIdError::CertVerificationFailed(e.0))?;
        if !conn_table.allows_no_san(current) {
            let remote_id = stored_id_update.clone().unwrap_or_else(|| conn_table.stored_peer_id(current));
            let cert_id = cert_matcher
                .match_end_cert_id(&certs, &remote_id)
                .map_err(|_| PeerIdError::CertSanMismatch)?;
            if cert_id.kind != IdKind::None {
                stored_id_update = Some(cert_id);
            }
        }
        found_peer_id = true;
    }

    Ok(ResolvedAggrResponderId { peer, found_peer_id, stored_id_update })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peer_id::boundary::test_doubles::{AlwaysVerifies, ConnectionProps, StaticConnectionTable};

    #[test]
    fn missing_id_and_cert_falls_back_to_none() {
        let peer = decode_peer_id(None, false);
        assert_eq!(peer.kind, IdKind::None);
    }

    #[test]
    fn missing_id_with_cert_defers_to_from_cert() {
        let peer = decode_peer_id(None, true);
        assert!(peer.needs_certificate());
    }

    #[test]
    fn initiator_rejects_mismatched_identity() {
        let expected = PeerId::new(IdKind::Fqdn("east.example.com".into()));
        let matcher = AlwaysVerifies::default();
        let result = ikev1_decode_peer_id_initiator(
            Some(RawIdPayload::Fqdn(b"someone-else.example.com".to_vec())),
            false,
            None,
            OakleyAuthMethod::PresharedKey,
            AuthBy::PSK,
            &expected,
            &matcher,
        );
        assert_eq!(result, Err(PeerIdError::IdentityMismatch));
    }

    #[test]
    fn initiator_accepts_matching_identity() {
        let expected = PeerId::new(IdKind::Fqdn("east.example.com".into()));
        let matcher = AlwaysVerifies::default();
        let result = ikev1_decode_peer_id_initiator(
            Some(RawIdPayload::Fqdn(b"east.example.com".to_vec())),
            false,
            None,
            OakleyAuthMethod::PresharedKey,
            AuthBy::PSK,
            &expected,
            &matcher,
        );
        assert_eq!(result, Ok(expected));
    }

    #[test]
    fn responder_rejects_unsupported_auth_method() {
        let table = StaticConnectionTable::default();
        let matcher = AlwaysVerifies::default();
        let current = ConnectionHandle("initial".into());
        let result = ikev1_decode_peer_id_main_mode_responder(
            Some(RawIdPayload::Null),
            false,
            None,
            "203.0.113.5".parse().unwrap(),
            OakleyAuthMethod::Null,
            &current,
            &table,
            &matcher,
        );
        assert_eq!(result, Err(PeerIdError::AuthMethodNotPermitted));
    }

    #[test]
    fn responder_switches_to_a_better_matching_connection() {
        let mut table = StaticConnectionTable::default();
        let peer = PeerId::new(IdKind::Fqdn("east.example.com".into()));
        table.insert(format!("{:?}", peer.kind), ConnectionHandle("east-conn".into()));
        let matcher = AlwaysVerifies::default();
        let current = ConnectionHandle("initial".into());

        let resolved = ikev1_decode_peer_id_main_mode_responder(
            Some(RawIdPayload::Fqdn(b"east.example.com".to_vec())),
            false,
            None,
            "203.0.113.5".parse().unwrap(),
            OakleyAuthMethod::PresharedKey,
            &current,
            &table,
            &matcher,
        )
        .unwrap();
        assert_eq!(resolved.connection, ConnectionHandle("east-conn".into()));
        assert!(resolved.switched);
        assert_eq!(resolved.stored_id_update, None);
    }

    #[test]
    fn responder_keeps_current_connection_when_id_already_matches() {
        let mut table = StaticConnectionTable::default();
        let current = ConnectionHandle("initial".into());
        let peer = PeerId::new(IdKind::Fqdn("east.example.com".into()));
        table.set_props(
            &current,
            ConnectionProps { stored_peer_id: peer.clone(), ..Default::default() },
        );
        let matcher = AlwaysVerifies::default();

        let resolved = ikev1_decode_peer_id_main_mode_responder(
            Some(RawIdPayload::Fqdn(b"east.example.com".to_vec())),
            false,
            None,
            "203.0.113.5".parse().unwrap(),
            OakleyAuthMethod::PresharedKey,
            &current,
            &table,
            &matcher,
        )
        .unwrap();
        assert_eq!(resolved.connection, current);
        assert!(!resolved.switched);
    }

    #[test]
    fn responder_errors_when_no_candidate_and_id_mismatches() {
        let table = StaticConnectionTable::default();
        let current = ConnectionHandle("initial".into());
        let matcher = AlwaysVerifies::default();

        let result = ikev1_decode_peer_id_main_mode_responder(
            Some(RawIdPayload::Fqdn(b"stranger.example.com".to_vec())),
            false,
            None,
            "203.0.113.5".parse().unwrap(),
            OakleyAuthMethod::PresharedKey,
            &current,
            &table,
            &matcher,
        );
        assert_eq!(result, Err(PeerIdError::IdentityMismatch));
    }

    #[test]
    fn responder_updates_stored_id_from_matched_cert() {
        let mut table = StaticConnectionTable::default();
        let current = ConnectionHandle("initial".into());
        table.set_props(
            &current,
            ConnectionProps {
                stored_peer_id: PeerId::new(IdKind::FromCert),
                ..Default::default()
            },
        );
        let cert_id = PeerId::new(IdKind::UserFqdn("peer@example.com".into()));
        let matcher = AlwaysVerifies { cert_id: Some(cert_id.clone()), ..Default::default() };

        let resolved = ikev1_decode_peer_id_main_mode_responder(
            Some(RawIdPayload::UserFqdn(b"peer@example.com".to_vec())),
            true,
            Some(&[vec![0x30]]),
            "203.0.113.5".parse().unwrap(),
            OakleyAuthMethod::RsaSignature,
            &current,
            &table,
            &matcher,
        )
        .unwrap();
        assert_eq!(resolved.connection, current);
        assert!(!resolved.switched);
        assert_eq!(resolved.stored_id_update, Some(cert_id));
    }

    #[test]
    fn responder_aborts_on_san_mismatch() {
        let table = StaticConnectionTable::default();
        let current = ConnectionHandle("initial".into());
        let matcher = AlwaysVerifies { san_mismatch: true, ..Default::default() };

        let result = ikev1_decode_peer_id_main_mode_responder(
            Some(RawIdPayload::Fqdn(b"east.example.com".to_vec())),
            true,
            Some(&[vec![0x30]]),
            "203.0.113.5".parse().unwrap(),
            OakleyAuthMethod::RsaSignature,
            &current,
            &table,
            &matcher,
        );
        assert_eq!(result, Err(PeerIdError::CertSanMismatch));
    }

    #[test]
    fn aggr_responder_narrows_fromcert_id_unconditionally() {
        let mut table = StaticConnectionTable::default();
        let current = ConnectionHandle("pinned".into());
        table.set_props(
            &current,
            ConnectionProps {
                stored_peer_id: PeerId::new(IdKind::FromCert),
                ..Default::default()
            },
        );
        let matcher = AlwaysVerifies::default();

        let resolved = ikev1_decode_peer_id_aggr_mode_responder(
            Some(RawIdPayload::Fqdn(b"east.example.com".to_vec())),
            false,
            None,
            &current,
            &table,
            &matcher,
        )
        .unwrap();
        assert_eq!(resolved.stored_id_update, Some(PeerId::new(IdKind::Fqdn("east.example.com".into()))));
        assert!(!resolved.found_peer_id);
    }

    #[test]
    fn aggr_responder_marks_found_peer_id_once_cert_is_processed() {
        let table = StaticConnectionTable::default();
        let current = ConnectionHandle("pinned".into());
        let matcher = AlwaysVerifies::default();

        let resolved = ikev1_decode_peer_id_aggr_mode_responder(
            Some(RawIdPayload::Fqdn(b"east.example.com".to_vec())),
            true,
            Some(&[vec![0x30]]),
            &current,
            &table,
            &matcher,
        )
        .unwrap();
        assert!(resolved.found_peer_id);
    }
}

//! Authentication method bookkeeping for the peer-ID resolver.

use super::boundary::Authenticator;
use super::error::PeerIdError;

bitflags::bitflags! {
    /// The set of authentication methods a connection is configured to
    /// accept. Mirrors `authby=` (see `swand_cfg::sparse::KW_AUTHBY_LR_LIST`)
    /// but as a composable set, since a connection may accept more than one
    /// method at once (e.g. `authby=rsasig,null`).
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct AuthBy: u8 {
        const PSK     = 1 << 0;
        const RSASIG  = 1 << 1;
        const ECDSA   = 1 << 2;
        const NULL    = 1 << 3;
        const EAPONLY = 1 << 4;
    }
}

/// The authentication method actually used by one IKEv1 exchange, as
/// determined by the OAKLEY auth attribute negotiated in phase 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OakleyAuthMethod {
    PresharedKey,
    RsaSignature,
    EcdsaSignature,
    /// RFC 7619: authentication with a NULL key, binding only to `ID_NULL`.
    Null,
    XauthInitPreshared,
    XauthRespPreshared,
    XauthInitRsaSig,
    XauthRespRsaSig,
}

impl OakleyAuthMethod {
    /// The [`AuthBy`] bit a connection must accept for this method to be
    /// usable, ignoring the XAUTH variants' extra bookkeeping.
    pub fn required(self) -> AuthBy {
        match self {
            OakleyAuthMethod::PresharedKey
            | OakleyAuthMethod::XauthInitPreshared
            | OakleyAuthMethod::XauthRespPreshared => AuthBy::PSK,
            OakleyAuthMethod::RsaSignature | OakleyAuthMethod::XauthInitRsaSig | OakleyAuthMethod::XauthRespRsaSig => {
                AuthBy::RSASIG
            }
            OakleyAuthMethod::EcdsaSignature => AuthBy::ECDSA,
            OakleyAuthMethod::Null => AuthBy::NULL,
        }
    }
}

/// Check that the negotiated auth method is actually one the connection
/// was configured to allow. `ID_NULL` is special-cased in the original: an
/// `AUTH_NULL` exchange is only ever acceptable if the connection enabled
/// it explicitly, since it authenticates nothing about the peer's identity.
pub fn oakley_auth_permitted(method: OakleyAuthMethod, allowed: AuthBy) -> bool {
    allowed.contains(method.required())
}

/// Which end of the SA a party is playing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SaRole {
    Initiator,
    Responder,
}

impl SaRole {
    pub fn flip(self) -> SaRole {
        match self {
            SaRole::Initiator => SaRole::Responder,
            SaRole::Responder => SaRole::Initiator,
        }
    }
}

/// Verify the Main Mode ID payload's authenticator (the HASH or SIG payload
/// that follows it).
///
/// `our_role` is our own role in this SA; the hash is computed under the
/// peer's role, since we're authenticating the other end. `received_hash`
/// carries the HASH payload bytes for `OAKLEY_PRESHARED_KEY`,
/// `received_signature` the SIG payload bytes for `OAKLEY_RSA_SIG`; the
/// other is ignored for either method.
pub fn oakley_auth(
    our_role: SaRole,
    method: OakleyAuthMethod,
    id_payload_body: &[u8],
    received_hash: Option<&[u8]>,
    received_signature: Option<&[u8]>,
    authenticator: &impl Authenticator,
) -> Result<(), PeerIdError> {
    let hash = authenticator.main_mode_hash(our_role.flip(), id_payload_body);
    match method {
        OakleyAuthMethod::PresharedKey => {
            let received = received_hash.ok_or(PeerIdError::InvalidHashInformation)?;
            if received != hash.as_slice() {
                return Err(PeerIdError::InvalidHashInformation);
            }
            Ok(())
        }
        OakleyAuthMethod::RsaSignature => {
            let signature = received_signature.ok_or(PeerIdError::InvalidKeyInformation)?;
            authenticator
                .verify_rsa_signature(&hash, signature)
                .map_err(|_| PeerIdError::InvalidKeyInformation)
        }
        // These are the only IKEv1 AUTH methods oakley_auth supports; being
        // asked to check any other is a programming error upstream of this
        // call (the exchange machinery should never negotiate one of them
        // into phase 1 authentication).
        other => panic!("oakley_auth: unsupported auth method {other:?}"),
    }
}

#[cfg(test)]
struct StubAuthenticator {
    hash: Vec<u8>,
    signature_ok: bool,
}

#[cfg(test)]
impl Authenticator for StubAuthenticator {
    fn main_mode_hash(&self, _role: SaRole, _id_payload_body: &[u8]) -> Vec<u8> {
        self.hash.clone()
    }

    fn verify_rsa_signature(&self, _hash: &[u8], _signature: &[u8]) -> Result<(), super::boundary::CertError> {
        if self.signature_ok {
            Ok(())
        } else {
            Err(super::boundary::CertError("bad signature".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psk_auth_accepts_byte_exact_hash() {
        let authenticator = StubAuthenticator { hash: vec![1, 2, 3], signature_ok: false };
        let result = oakley_auth(
            SaRole::Responder,
            OakleyAuthMethod::PresharedKey,
            b"id-payload",
            Some(&[1, 2, 3]),
            None,
            &authenticator,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn psk_auth_rejects_mismatched_hash() {
        let authenticator = StubAuthenticator { hash: vec![1, 2, 3], signature_ok: false };
        let result = oakley_auth(
            SaRole::Responder,
            OakleyAuthMethod::PresharedKey,
            b"id-payload",
            Some(&[9, 9, 9]),
            None,
            &authenticator,
        );
        assert_eq!(result, Err(PeerIdError::InvalidHashInformation));
    }

    #[test]
    fn rsa_auth_rejects_bad_signature() {
        let authenticator = StubAuthenticator { hash: vec![1, 2, 3], signature_ok: false };
        let result = oakley_auth(
            SaRole::Responder,
            OakleyAuthMethod::RsaSignature,
            b"id-payload",
            None,
            Some(&[0xde, 0xad]),
            &authenticator,
        );
        assert_eq!(result, Err(PeerIdError::InvalidKeyInformation));
    }

    #[test]
    fn rsa_auth_accepts_good_signature() {
        let authenticator = StubAuthenticator { hash: vec![1, 2, 3], signature_ok: true };
        let result = oakley_auth(
            SaRole::Responder,
            OakleyAuthMethod::RsaSignature,
            b"id-payload",
            None,
            Some(&[0xde, 0xad]),
            &authenticator,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn null_auth_requires_explicit_opt_in() {
        let allowed = AuthBy::RSASIG | AuthBy::PSK;
        assert!(!oakley_auth_permitted(OakleyAuthMethod::Null, allowed));
        assert!(oakley_auth_permitted(OakleyAuthMethod::Null, allowed | AuthBy::NULL));
    }

    #[test]
    fn psk_permitted_only_when_configured() {
        assert!(oakley_auth_permitted(OakleyAuthMethod::PresharedKey, AuthBy::PSK));
        assert!(!oakley_auth_permitted(OakleyAuthMethod::PresharedKey, AuthBy::RSASIG));
    }
}

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PeerIdError {
    /// The certificate chain the peer sent could not be verified.
    CertVerificationFailed(String),
    /// The peer claimed `ID_FROM_CERT` behavior (sent no ID payload) but
    /// also sent no certificate to resolve it from.
    NoCertificateToResolveIdentity,
    /// The negotiated OAKLEY auth method isn't one this connection (or, for
    /// a responder still searching, any configured connection) accepts.
    AuthMethodNotPermitted,
    /// As initiator, the ID the responder asserted didn't match what our
    /// configuration expected of that connection's peer.
    IdentityMismatch,
    /// As responder, no configured connection matched this peer/address
    /// combination.
    NoMatchingConnection,
    /// The certificate's SAN did not match the peer id we expected it to
    /// carry.
    CertSanMismatch,
    /// PSK authentication: the received HASH payload did not match the
    /// locally computed value.
    InvalidHashInformation,
    /// RSA signature authentication: signature verification against the
    /// peer's public key failed.
    InvalidKeyInformation,
}

impl fmt::Display for PeerIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerIdError::CertVerificationFailed(reason) => write!(f, "certificate verification failed: {reason}"),
            PeerIdError::NoCertificateToResolveIdentity => {
                write!(f, "no ID payload and no certificate to resolve an identity from")
            }
            PeerIdError::AuthMethodNotPermitted => write!(f, "negotiated auth method not permitted"),
            PeerIdError::IdentityMismatch => write!(f, "peer identity did not match the configured expectation"),
            PeerIdError::NoMatchingConnection => write!(f, "no configured connection matched this peer"),
            PeerIdError::CertSanMismatch => write!(f, "X509: CERT payload does not match connection ID"),
            PeerIdError::InvalidHashInformation => {
                write!(f, "received Hash Payload does not match computed value")
            }
            PeerIdError::InvalidKeyInformation => {
                write!(f, "received Signature Payload did not match computed value")
            }
        }
    }
}

impl std::error::Error for PeerIdError {}

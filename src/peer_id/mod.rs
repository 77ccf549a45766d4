//! IKEv1 peer identification: deciding who the peer in a negotiation is,
//! and (for a responder) which configured connection that makes them.

mod auth;
mod boundary;
mod id;
mod error;
mod resolve;

pub use auth::{oakley_auth, oakley_auth_permitted, AuthBy, OakleyAuthMethod, SaRole};
pub use boundary::{Authenticator, CertError, CertMatcher, ConnectionHandle, ConnectionTable, Refinement, VerifiedCerts};
pub use error::PeerIdError;
pub use id::{IdKind, PeerId};
pub use resolve::{
    decode_peer_id, ikev1_decode_peer_id_aggr_mode_responder, ikev1_decode_peer_id_initiator,
    ikev1_decode_peer_id_main_mode_responder, RawIdPayload,
};

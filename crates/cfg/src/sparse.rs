//! Sparse enumerations: ordered `(symbolic_name, numeric_value)` lists
//! consulted by the enum/loose-enum/multi-enum-list decoders.

/// One entry of a sparse enumeration. Multiple entries may share a `value`
/// (aliases).
#[derive(Copy, Clone, Debug)]
pub struct SparseName {
    pub name: &'static str,
    pub value: u32,
}

macro_rules! sparse {
    ($name:ident: $( $n:expr => $v:expr ),+ $(,)?) => {
        pub static $name: &[SparseName] = &[
            $( SparseName { name: $n, value: $v } ),+
        ];
    };
}

// failureshunt={passthrough, drop, reject, none}
pub const KFS_FAIL_NONE: u32 = 0;
pub const KFS_FAIL_PASS: u32 = 1;
pub const KFS_FAIL_DROP: u32 = 2;
pub const KFS_FAIL_REJECT: u32 = 3;
sparse!(KW_FAILURESHUNT_LIST:
    "none" => KFS_FAIL_NONE,
    "passthrough" => KFS_FAIL_PASS,
    "drop" => KFS_FAIL_DROP,
    "hold" => KFS_FAIL_DROP,
    "reject" => KFS_FAIL_REJECT,
);

// negotiationshunt={passthrough, hold}
pub const KNS_NEGO_PASS: u32 = 0;
pub const KNS_NEGO_HOLD: u32 = 1;
sparse!(KW_NEGOTIATIONSHUNT_LIST:
    "passthrough" => KNS_NEGO_PASS,
    "drop" => KNS_NEGO_HOLD,
    "hold" => KNS_NEGO_HOLD,
);

// enable-tcp={no, yes, fallback}
pub const IKE_TCP_NO: u32 = 0;
pub const IKE_TCP_ONLY: u32 = 1;
pub const IKE_TCP_FALLBACK: u32 = 2;
sparse!(KW_TCP_LIST:
    "no" => IKE_TCP_NO,
    "yes" => IKE_TCP_ONLY,
    "fallback" => IKE_TCP_FALLBACK,
);

// keyexchange=
pub const KE_IKE: u32 = 1;
sparse!(KW_KEYEXCHANGE_LIST: "ike" => KE_IKE);

// four-state options, used by ppk=
pub const FO_NEVER: u32 = 0;
pub const FO_PERMIT: u32 = 1;
pub const FO_PROPOSE: u32 = 2;
pub const FO_INSIST: u32 = 3;
sparse!(KW_FOURVALUED_LIST:
    "never" => FO_NEVER,
    "permit" => FO_PERMIT,
    "propose" => FO_PROPOSE,
    "insist" => FO_INSIST,
    "yes" => FO_PROPOSE,
    "always" => FO_INSIST,
    "no" => FO_NEVER,
);

// yes/no/force, used by fragmentation=
pub const YNF_NO: u32 = 0;
pub const YNF_YES: u32 = 1;
pub const YNF_FORCE: u32 = 2;
sparse!(KW_YNF_LIST:
    "never" => YNF_NO,
    "no" => YNF_NO,
    "yes" => YNF_YES,
    "insist" => YNF_FORCE,
    "force" => YNF_FORCE,
);

// yes/no, used by ipsec-interface (loose-enum: any other number passes
// through as a string fallback and is parsed downstream).
pub const YNDEV_YES: u32 = 1;
pub const YNDEV_NO: u32 = u32::MAX;
sparse!(KW_YNDEV_LIST:
    "yes" => YNDEV_YES,
    "no" => YNDEV_NO,
);

// yes/no/auto, used by encapsulation and nic-offload
pub const YNA_YES: u32 = 0;
pub const YNA_NO: u32 = 1;
pub const YNA_AUTO: u32 = 2;
sparse!(KW_YNA_LIST:
    "yes" => YNA_YES,
    "no" => YNA_NO,
    "auto" => YNA_AUTO,
);

pub const ESN_YES: u32 = 0;
pub const ESN_NO: u32 = 1;
pub const ESN_EITHER: u32 = 2;
sparse!(KW_ESN_LIST:
    "yes" => ESN_YES,
    "no" => ESN_NO,
    "either" => ESN_EITHER,
);

pub const DDOS_AUTO: u32 = 0;
pub const DDOS_FORCE_BUSY: u32 = 1;
pub const DDOS_FORCE_UNLIMITED: u32 = 2;
sparse!(KW_DDOS_LIST:
    "auto" => DDOS_AUTO,
    "busy" => DDOS_FORCE_BUSY,
    "unlimited" => DDOS_FORCE_UNLIMITED,
);

pub const SECCOMP_ENABLED: u32 = 0;
pub const SECCOMP_DISABLED: u32 = 1;
pub const SECCOMP_TOLERANT: u32 = 2;
sparse!(KW_SECCOMP_LIST:
    "enabled" => SECCOMP_ENABLED,
    "disabled" => SECCOMP_DISABLED,
    "tolerant" => SECCOMP_TOLERANT,
);

// authby names, shared by the per-endpoint `auth=` keyword.
pub const AUTHBY_NEVER: u32 = 0;
pub const AUTHBY_PSK: u32 = 1;
pub const AUTHBY_RSASIG: u32 = 2;
pub const AUTHBY_ECDSA: u32 = 3;
pub const AUTHBY_NULL: u32 = 4;
pub const AUTHBY_EAPONLY: u32 = 5;
sparse!(KW_AUTHBY_LR_LIST:
    "never" => AUTHBY_NEVER,
    "secret" => AUTHBY_PSK,
    "rsasig" => AUTHBY_RSASIG,
    "rsa" => AUTHBY_RSASIG,
    "ecdsa" => AUTHBY_ECDSA,
    "null" => AUTHBY_NULL,
    "eaponly" => AUTHBY_EAPONLY,
);

// dpdaction={hold,clear,restart}
pub const DPD_ACTION_HOLD: u32 = 0;
pub const DPD_ACTION_CLEAR: u32 = 1;
pub const DPD_ACTION_RESTART: u32 = 2;
sparse!(KW_DPDACTION_LIST:
    "hold" => DPD_ACTION_HOLD,
    "clear" => DPD_ACTION_CLEAR,
    "restart" => DPD_ACTION_RESTART,
    "restart_by_peer" => DPD_ACTION_RESTART,
);

// sendca={none,issuer,all}
pub const CA_SEND_NONE: u32 = 0;
pub const CA_SEND_ISSUER: u32 = 1;
pub const CA_SEND_ALL: u32 = 2;
sparse!(KW_SENDCA_LIST:
    "none" => CA_SEND_NONE,
    "issuer" => CA_SEND_ISSUER,
    "all" => CA_SEND_ALL,
);

// auto={add,start,ondemand,ignore,keep}
pub const STARTUP_IGNORE: u32 = 0;
pub const STARTUP_ADD: u32 = 1;
pub const STARTUP_ONDEMAND: u32 = 2;
pub const STARTUP_START: u32 = 3;
pub const STARTUP_KEEP: u32 = 4;
sparse!(KW_AUTO_LIST:
    "ignore" => STARTUP_IGNORE,
    "add" => STARTUP_ADD,
    "ondemand" => STARTUP_ONDEMAND,
    "route" => STARTUP_ONDEMAND,
    "start" => STARTUP_START,
    "up" => STARTUP_START,
    "keep" => STARTUP_KEEP,
);

// addrfamily={ipv4,ipv6}
pub const AF_INET: u32 = 4;
pub const AF_INET6: u32 = 6;
sparse!(KW_ADDRFAMILY_LIST:
    "ipv4" => AF_INET,
    "ipv6" => AF_INET6,
    "v4" => AF_INET,
    "inet" => AF_INET,
    "v6" => AF_INET6,
    "inet6" => AF_INET6,
);

// type={tunnel,transport,etc}
pub const KS_TUNNEL: u32 = 0;
pub const KS_TRANSPORT: u32 = 1;
pub const KS_PASSTHROUGH: u32 = 2;
pub const KS_REJECT: u32 = 3;
pub const KS_DROP: u32 = 4;
sparse!(KW_TYPE_LIST:
    "tunnel" => KS_TUNNEL,
    "transport" => KS_TRANSPORT,
    "pass" => KS_PASSTHROUGH,
    "passthrough" => KS_PASSTHROUGH,
    "reject" => KS_REJECT,
    "drop" => KS_DROP,
);

// rsasigkey={ %cert, %dnsondemand, %dns, literal }
pub const PUBKEY_PREEXCHANGED: u32 = 0;
pub const PUBKEY_CERTIFICATE: u32 = 1;
pub const PUBKEY_DNSONDEMAND: u32 = 2;
sparse!(KW_RSASIGKEY_LIST:
    "" => PUBKEY_PREEXCHANGED,
    "%cert" => PUBKEY_CERTIFICATE,
    "%dns" => PUBKEY_DNSONDEMAND,
    "%dnsondemand" => PUBKEY_DNSONDEMAND,
);

// Cisco interop: remote peer type
pub const CISCO: u32 = 1;
sparse!(KW_REMOTE_PEER_TYPE_LIST: "cisco" => CISCO);

pub const XAUTHBY_FILE: u32 = 0;
pub const XAUTHBY_PAM: u32 = 1;
pub const XAUTHBY_ALWAYSOK: u32 = 2;
sparse!(KW_XAUTHBY_LIST:
    "file" => XAUTHBY_FILE,
    "pam" => XAUTHBY_PAM,
    "alwaysok" => XAUTHBY_ALWAYSOK,
);

pub const XAUTHFAIL_HARD: u32 = 0;
pub const XAUTHFAIL_SOFT: u32 = 1;
sparse!(KW_XAUTHFAIL_LIST:
    "hard" => XAUTHFAIL_HARD,
    "soft" => XAUTHFAIL_SOFT,
);

// Values for right= and left=
pub const KH_DEFAULTROUTE: u32 = 1;
pub const KH_ANY: u32 = 2;
pub const KH_IFACE: u32 = 3;
pub const KH_OPPO: u32 = 4;
pub const KH_OPPOGROUP: u32 = 5;
pub const KH_GROUP: u32 = 6;
pub const KH_IPHOSTNAME: u32 = 7;
sparse!(KW_HOST_LIST:
    "%defaultroute" => KH_DEFAULTROUTE,
    "%any" => KH_ANY,
    "%" => KH_IFACE,
    "%oppo" => KH_OPPO,
    "%opportunistic" => KH_OPPO,
    "%opportunisticgroup" => KH_OPPOGROUP,
    "%oppogroup" => KH_OPPOGROUP,
    "%group" => KH_GROUP,
    "%hostname" => KH_IPHOSTNAME,
);

// phase2 policy bits, OR'ed together by the multi-enum-list decoder.
pub const POLICY_ENCRYPT: u32 = 1 << 0;
pub const POLICY_AUTHENTICATE: u32 = 1 << 1;
sparse!(KW_PHASE2TYPES_LIST:
    "esp" => POLICY_ENCRYPT,
    "ah" => POLICY_AUTHENTICATE,
    "default" => POLICY_ENCRYPT,
);

// {left/right}sendcert={never,sendifasked,always,forcedtype}
pub const CERT_NEVERSEND: u32 = 0;
pub const CERT_SENDIFASKED: u32 = 1;
pub const CERT_ALWAYSSEND: u32 = 2;
sparse!(KW_SENDCERT_LIST:
    "never" => CERT_NEVERSEND,
    "sendifasked" => CERT_SENDIFASKED,
    "alwayssend" => CERT_ALWAYSSEND,
    "always" => CERT_ALWAYSSEND,
);

// nat-ikev1-method={drafts,rfc,both,none}
pub const NATT_BOTH: u32 = 0;
pub const NATT_RFC: u32 = 1;
pub const NATT_DRAFTS: u32 = 2;
pub const NATT_NONE: u32 = 3;
sparse!(KW_IKEV1NATT_LIST:
    "both" => NATT_BOTH,
    "rfc" => NATT_RFC,
    "drafts" => NATT_DRAFTS,
    "none" => NATT_NONE,
);

// ocsp-method={get|post}
pub const OCSP_METHOD_GET: u32 = 0;
pub const OCSP_METHOD_POST: u32 = 1;
sparse!(KW_OCSP_METHOD_LIST:
    "get" => OCSP_METHOD_GET,
    "post" => OCSP_METHOD_POST,
);

pub const GLOBAL_IKEV1_ACCEPT: u32 = 0;
pub const GLOBAL_IKEV1_REJECT: u32 = 1;
pub const GLOBAL_IKEV1_DROP: u32 = 2;
sparse!(KW_GLOBAL_IKEV1_LIST:
    "accept" => GLOBAL_IKEV1_ACCEPT,
    "reject" => GLOBAL_IKEV1_REJECT,
    "drop" => GLOBAL_IKEV1_DROP,
);

pub const IKE_EAP_NONE: u32 = 0;
pub const IKE_EAP_TLS: u32 = 1;
sparse!(KW_EAP_LIST:
    "none" => IKE_EAP_NONE,
    "tls" => IKE_EAP_TLS,
);

/// Look up `name` case-insensitively in `list`. Returns the first matching
/// entry's value (earlier entries win on alias collisions, matching the
/// original's first-match linear scan).
pub fn sparse_lookup(list: &[SparseName], name: &str) -> Option<u32> {
    list.iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.value)
}

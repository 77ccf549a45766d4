//! The master keyword table: one entry per recognized `ipsec.conf` option.
//!
//! Transcribed from the canonical keyword list. Every name, alias, validity
//! scope, value type, and destination slot here is a direct translation;
//! nothing is invented. Two quirks are preserved verbatim rather than fixed,
//! per the accompanying design notes:
//!
//! - `"dns-match-id,"` carries a trailing comma in its name. A config file
//!   can never supply a literal comma inside an identifier, so this keyword
//!   can never match. It is almost certainly a long-standing bug upstream;
//!   we keep it exactly as found and have a test document it (see
//!   `tests::dns_match_id_trailing_comma_never_matches`).
//! - The loose-enum sentinel that used to be a magic number `255` is instead
//!   represented by [`crate::decode::LooseEnumOutcome::StringFallback`] at
//!   the decoder layer; the table itself only records which keywords are
//!   loose-enums.

use crate::decode::SubnetPolicy;
use crate::slot::{KbfSlot, KncfSlot, KscfSlot, KsfSlot, Slot};
use crate::sparse::*;
use crate::modifiers::{ModifierDict, DEBUG_MODIFIERS};
use crate::validity::Validity;
use crate::value_type::ValueType;

#[derive(Copy, Clone, Debug)]
pub struct KeywordDef {
    pub name: &'static str,
    pub validity: Validity,
    pub value_type: ValueType,
    pub slot: Slot,
    pub sparse: Option<&'static [SparseName]>,
    pub modifiers: Option<&'static ModifierDict>,
    /// Host-part-bits policy for `VT::Subnet` descriptors; irrelevant
    /// otherwise. Defaults to `Strict`, matching how a user-supplied
    /// `left`/`rightsubnet=` is treated upstream.
    pub subnet_policy: SubnetPolicy,
}

const fn plain(name: &'static str, validity: Validity, value_type: ValueType, slot: Slot) -> KeywordDef {
    KeywordDef {
        name,
        validity,
        value_type,
        slot,
        sparse: None,
        modifiers: None,
        subnet_policy: SubnetPolicy::Strict,
    }
}

const fn enumed(
    name: &'static str,
    validity: Validity,
    value_type: ValueType,
    slot: Slot,
    sparse: &'static [SparseName],
) -> KeywordDef {
    KeywordDef {
        name,
        validity,
        value_type,
        slot,
        sparse: Some(sparse),
        modifiers: None,
        subnet_policy: SubnetPolicy::Strict,
    }
}

const fn lset(name: &'static str, validity: Validity, slot: Slot, dict: &'static ModifierDict) -> KeywordDef {
    KeywordDef {
        name,
        validity,
        value_type: ValueType::ModifierSet,
        slot,
        sparse: None,
        modifiers: Some(dict),
        subnet_policy: SubnetPolicy::Strict,
    }
}

/// A `VT::Subnet` descriptor with an explicit host-part-bits policy.
const fn subnet_kw(name: &'static str, validity: Validity, slot: Slot, subnet_policy: SubnetPolicy) -> KeywordDef {
    KeywordDef {
        name,
        validity,
        value_type: ValueType::Subnet,
        slot,
        sparse: None,
        modifiers: None,
        subnet_policy,
    }
}

use Slot::{ConnNumber as N, ConnString as S, GlobalNumber as GN, GlobalString as GS};
use ValueType as VT;

pub static KEYWORDS: &[KeywordDef] = &[
    enumed("ikev1-policy", Validity::CONFIG, VT::Enum, GN(KbfSlot::GlobalIkev1), KW_GLOBAL_IKEV1_LIST),
    plain("interfaces", Validity::CONFIG, VT::String, GS(KsfSlot::Interfaces)),
    plain("curl-iface", Validity::CONFIG, VT::String, GS(KsfSlot::CurlIface)),
    plain("curl-timeout", Validity::CONFIG, VT::Time, GN(KbfSlot::CurlTimeoutMs)),

    plain("myvendorid", Validity::CONFIG, VT::String, GS(KsfSlot::Myvendorid)),
    plain("syslog", Validity::CONFIG, VT::String, GS(KsfSlot::Syslog)),
    lset("plutodebug", Validity::CONFIG, GN(KbfSlot::Plutodebug), &DEBUG_MODIFIERS),
    plain("logfile", Validity::CONFIG, VT::Filename, GS(KsfSlot::Logfile)),
    plain("plutostderrlog", Validity::CONFIG, VT::Filename, GS(KsfSlot::Logfile)), // obsolete name, but very common
    plain("logtime", Validity::CONFIG, VT::Bool, GN(KbfSlot::Logtime)),
    plain("logappend", Validity::CONFIG, VT::Bool, GN(KbfSlot::Logappend)),
    plain("logip", Validity::CONFIG, VT::Bool, GN(KbfSlot::Logip)),
    plain("audit-log", Validity::CONFIG, VT::Bool, GN(KbfSlot::AuditLog)),
    plain("dnssec-enable", Validity::CONFIG, VT::Bool, GN(KbfSlot::DoDnssec)),
    plain("dnssec-rootkey-file", Validity::CONFIG, VT::Filename, GS(KsfSlot::PlutoDnssecRootkeyFile)),
    plain("dnssec-anchors", Validity::CONFIG, VT::Filename, GS(KsfSlot::PlutoDnssecAnchors)),
    plain("dumpdir", Validity::CONFIG, VT::Dirname, GS(KsfSlot::Dumpdir)),
    plain("ipsecdir", Validity::CONFIG, VT::Dirname, GS(KsfSlot::Ipsecdir)),
    plain("nssdir", Validity::CONFIG, VT::Dirname, GS(KsfSlot::Nssdir)),
    plain("secretsfile", Validity::CONFIG, VT::Dirname, GS(KsfSlot::Secretsfile)),
    plain("statsbin", Validity::CONFIG, VT::Dirname, GS(KsfSlot::Statsbinary)),
    plain("uniqueids", Validity::CONFIG, VT::Bool, GN(KbfSlot::Uniqueids)),
    plain("shuntlifetime", Validity::CONFIG, VT::Time, GN(KbfSlot::ShuntlifetimeMs)),
    plain("global-redirect", Validity::CONFIG, VT::String, GS(KsfSlot::GlobalRedirect)),
    plain("global-redirect-to", Validity::CONFIG, VT::String, GS(KsfSlot::GlobalRedirectTo)),

    plain("crl-strict", Validity::CONFIG, VT::Bool, GN(KbfSlot::CrlStrict)),
    plain("crlcheckinterval", Validity::CONFIG, VT::Time, GN(KbfSlot::CrlCheckintervalMs)),

    plain("ocsp-strict", Validity::CONFIG, VT::Bool, GN(KbfSlot::OcspStrict)),
    plain("ocsp-enable", Validity::CONFIG, VT::Bool, GN(KbfSlot::OcspEnable)),
    plain("ocsp-uri", Validity::CONFIG, VT::String, GS(KsfSlot::OcspUri)),
    plain("ocsp-timeout", Validity::CONFIG, VT::Number, GN(KbfSlot::OcspTimeout)),
    plain("ocsp-trustname", Validity::CONFIG, VT::String, GS(KsfSlot::OcspTrustname)),
    plain("ocsp-cache-size", Validity::CONFIG, VT::Number, GN(KbfSlot::OcspCacheSize)),
    plain("ocsp-cache-min-age", Validity::CONFIG, VT::Time, GN(KbfSlot::OcspCacheMinAgeMs)),
    plain("ocsp-cache-max-age", Validity::CONFIG, VT::Time, GN(KbfSlot::OcspCacheMaxAgeMs)),
    enumed("ocsp-method", Validity::CONFIG.union(Validity::PROCESSED), VT::Enum, GN(KbfSlot::OcspMethod), KW_OCSP_METHOD_LIST),

    enumed("ddos-mode", Validity::CONFIG.union(Validity::PROCESSED), VT::Enum, GN(KbfSlot::DdosMode), KW_DDOS_LIST),
    enumed("seccomp", Validity::CONFIG.union(Validity::PROCESSED), VT::Enum, GN(KbfSlot::Seccomp), KW_SECCOMP_LIST),
    plain("ddos-ike-threshold", Validity::CONFIG, VT::Number, GN(KbfSlot::DdosIkeThreshold)),
    plain("max-halfopen-ike", Validity::CONFIG, VT::Number, GN(KbfSlot::MaxHalfopenIke)),
    plain("ike-socket-bufsize", Validity::CONFIG, VT::Number, GN(KbfSlot::Ikebuf)),
    plain("ike-socket-errqueue", Validity::CONFIG, VT::Bool, GN(KbfSlot::IkeErrqueue)),
    plain("nflog-all", Validity::CONFIG, VT::Number, GN(KbfSlot::NflogAll)),
    plain("xfrmlifetime", Validity::CONFIG, VT::Number, GN(KbfSlot::Xfrmlifetime)),
    plain("virtual-private", Validity::CONFIG, VT::String, GS(KsfSlot::Virtualprivate)),
    plain("virtual_private", Validity::CONFIG, VT::String, GS(KsfSlot::Virtualprivate)), // obsolete variant, very common
    plain("seedbits", Validity::CONFIG, VT::Number, GN(KbfSlot::Seedbits)),
    plain("keep-alive", Validity::CONFIG, VT::Number, GN(KbfSlot::Keepalive)),

    plain("listen-tcp", Validity::CONFIG, VT::Bool, GN(KbfSlot::ListenTcp)),
    plain("listen-udp", Validity::CONFIG, VT::Bool, GN(KbfSlot::ListenUdp)),

    plain("listen", Validity::CONFIG, VT::String, GS(KsfSlot::Listen)),
    plain("protostack", Validity::CONFIG, VT::String, GS(KsfSlot::Protostack)),
    plain("nhelpers", Validity::CONFIG, VT::Number, GN(KbfSlot::Nhelpers)),
    plain("drop-oppo-null", Validity::CONFIG, VT::Bool, GN(KbfSlot::DropOppoNull)),
    plain("ikev1-secctx-attr-type", Validity::CONFIG, VT::Number, GN(KbfSlot::Secctx)), // obsolete: not a value, a type
    plain("secctx-attr-type", Validity::CONFIG.union(Validity::ALIAS), VT::Number, GN(KbfSlot::Secctx)),

    // "left=" and "right="
    enumed(
        "",
        Validity::CONN.union(Validity::LEFTRIGHT).union(Validity::PROCESSED),
        VT::LooseEnum,
        S(KscfSlot::Ip),
        KW_HOST_LIST,
    ),

    subnet_kw("subnet", Validity::CONN.union(Validity::LEFTRIGHT).union(Validity::PROCESSED), S(KscfSlot::Subnet), SubnetPolicy::Strict),
    plain("subnets", Validity::CONN.union(Validity::LEFTRIGHT), VT::AppendList, S(KscfSlot::Subnets)),
    plain("sourceip", Validity::CONN.union(Validity::LEFTRIGHT), VT::IpAddr, S(KscfSlot::Sourceip)),
    plain("ikeport", Validity::CONN.union(Validity::LEFTRIGHT), VT::Number, N(KncfSlot::Ikeport)),
    // vti= addresses a virtual-tunnel-interface IP, not a routing subnet; a
    // host-part bit here just means "this interface's address", so it's
    // cleared rather than rejected.
    subnet_kw("vti", Validity::CONN.union(Validity::LEFTRIGHT).union(Validity::PROCESSED), S(KscfSlot::VtiIp), SubnetPolicy::Zero),
    plain("nexthop", Validity::CONN.union(Validity::LEFTRIGHT), VT::IpAddr, S(KscfSlot::Nexthop)),
    plain("updown", Validity::CONN.union(Validity::LEFTRIGHT), VT::Filename, S(KscfSlot::Updown)),
    plain("id", Validity::CONN.union(Validity::LEFTRIGHT), VT::IdType, S(KscfSlot::Id)),
    enumed("rsasigkey", Validity::CONN.union(Validity::LEFTRIGHT), VT::RsaSigKey, S(KscfSlot::Rsasigkey), KW_RSASIGKEY_LIST),
    plain("cert", Validity::CONN.union(Validity::LEFTRIGHT), VT::Filename, S(KscfSlot::Cert)),
    plain("ckaid", Validity::CONN.union(Validity::LEFTRIGHT), VT::String, S(KscfSlot::Ckaid)),
    enumed("sendcert", Validity::CONN.union(Validity::LEFTRIGHT), VT::Enum, N(KncfSlot::Sendcert), KW_SENDCERT_LIST),
    plain("ca", Validity::CONN.union(Validity::LEFTRIGHT), VT::String, S(KscfSlot::Ca)),
    plain("xauthserver", Validity::CONN.union(Validity::LEFTRIGHT), VT::Bool, N(KncfSlot::Xauthserver)),
    plain("xauthclient", Validity::CONN.union(Validity::LEFTRIGHT), VT::Bool, N(KncfSlot::Xauthclient)),
    plain("modecfgserver", Validity::CONN.union(Validity::LEFTRIGHT), VT::Bool, N(KncfSlot::Modeconfigserver)),
    plain("modecfgclient", Validity::CONN.union(Validity::LEFTRIGHT), VT::Bool, N(KncfSlot::Modeconfigclient)),
    plain("username", Validity::CONN.union(Validity::LEFTRIGHT), VT::String, S(KscfSlot::Username)),
    plain("xauthusername", Validity::CONN.union(Validity::LEFTRIGHT), VT::String, S(KscfSlot::Username)), // old alias, still used by NetworkManager-libreswan
    plain("addresspool", Validity::CONN.union(Validity::LEFTRIGHT), VT::Range, S(KscfSlot::Addresspool)),
    enumed("auth", Validity::CONN.union(Validity::LEFTRIGHT), VT::Enum, N(KncfSlot::Auth), KW_AUTHBY_LR_LIST),
    plain("cat", Validity::CONN.union(Validity::LEFTRIGHT), VT::Bool, N(KncfSlot::Cat)),
    plain("protoport", Validity::CONN.union(Validity::LEFTRIGHT).union(Validity::PROCESSED), VT::Protoport, S(KscfSlot::Protoport)),
    enumed("autheap", Validity::CONN.union(Validity::LEFTRIGHT), VT::Enum, N(KncfSlot::Eap), KW_EAP_LIST),

    // conn statements which are not left/right
    enumed("auto", Validity::CONN.union(Validity::DUPLICATE_OK), VT::Enum, N(KncfSlot::Auto), KW_AUTO_LIST),
    plain("also", Validity::CONN, VT::AppendString, S(KscfSlot::Also)),
    plain("alsoflip", Validity::CONN, VT::String, S(KscfSlot::Alsoflip)),
    plain("ike", Validity::CONN, VT::String, S(KscfSlot::Ike)),
    enumed("hostaddrfamily", Validity::CONN, VT::Enum, N(KncfSlot::Hostaddrfamily), KW_ADDRFAMILY_LIST),
    enumed("clientaddrfamily", Validity::CONN, VT::Enum, N(KncfSlot::Clientaddrfamily), KW_ADDRFAMILY_LIST),
    enumed("type", Validity::CONN, VT::Enum, N(KncfSlot::Type), KW_TYPE_LIST),
    plain("authby", Validity::CONN, VT::String, S(KscfSlot::Authby)),
    enumed("keyexchange", Validity::CONN, VT::Enum, N(KncfSlot::Keyexchange), KW_KEYEXCHANGE_LIST),
    enumed("ikev2", Validity::CONN.union(Validity::PROCESSED), VT::Enum, N(KncfSlot::Ikev2), KW_FOURVALUED_LIST),
    enumed("ppk", Validity::CONN.union(Validity::PROCESSED), VT::Enum, N(KncfSlot::Ppk), KW_FOURVALUED_LIST),
    plain("intermediate", Validity::CONN.union(Validity::PROCESSED), VT::Bool, N(KncfSlot::Intermediate)),
    enumed("esn", Validity::CONN.union(Validity::PROCESSED), VT::Enum, N(KncfSlot::Esn), KW_ESN_LIST),
    plain("decap-dscp", Validity::CONN.union(Validity::PROCESSED), VT::Bool, N(KncfSlot::DecapDscp)),
    plain("nopmtudisc", Validity::CONN.union(Validity::PROCESSED), VT::Bool, N(KncfSlot::Nopmtudisc)),
    enumed("fragmentation", Validity::CONN.union(Validity::PROCESSED), VT::Enum, N(KncfSlot::IkeFrag), KW_YNF_LIST),
    plain("mobike", Validity::CONN, VT::Bool, N(KncfSlot::Mobike)),
    plain("narrowing", Validity::CONN, VT::Bool, N(KncfSlot::Ikev2AllowNarrowing)),
    plain("pam-authorize", Validity::CONN, VT::Bool, N(KncfSlot::Ikev2PamAuthorize)),
    enumed("send-redirect", Validity::CONN, VT::Enum, N(KncfSlot::SendRedirect), KW_YNA_LIST),
    plain("redirect-to", Validity::CONN, VT::String, S(KscfSlot::RedirectTo)),
    enumed("accept-redirect", Validity::CONN, VT::Enum, N(KncfSlot::AcceptRedirect), KW_YNA_LIST),
    plain("accept-redirect-to", Validity::CONN, VT::String, S(KscfSlot::AcceptRedirectTo)),
    plain("pfs", Validity::CONN, VT::Bool, N(KncfSlot::Pfs)),

    plain("nat-keepalive", Validity::CONN, VT::Bool, N(KncfSlot::NatKeepalive)),

    plain("initial-contact", Validity::CONN, VT::Bool, N(KncfSlot::InitialContact)),
    plain("cisco-unity", Validity::CONN, VT::Bool, N(KncfSlot::CiscoUnity)),
    plain("send-no-esp-tfc", Validity::CONN, VT::Bool, N(KncfSlot::NoEspTfc)),
    plain("fake-strongswan", Validity::CONN, VT::Bool, N(KncfSlot::VidStrongswan)),
    plain("send-vendorid", Validity::CONN, VT::Bool, N(KncfSlot::SendVendorid)),
    plain("sha2-truncbug", Validity::CONN, VT::Bool, N(KncfSlot::Sha2Truncbug)),
    plain("ms-dh-downgrade", Validity::CONN, VT::Bool, N(KncfSlot::MsdhDowngrade)),
    plain("require-id-on-certificate", Validity::CONN, VT::Bool, N(KncfSlot::SanOnCert)),
    // NOTE: trailing comma in the name is intentional, see module docs.
    plain("dns-match-id,", Validity::CONN, VT::Bool, N(KncfSlot::DnsMatchId)),
    plain("keylife", Validity::CONN.union(Validity::ALIAS), VT::Time, N(KncfSlot::SalifetimeMs)),
    plain("lifetime", Validity::CONN.union(Validity::ALIAS), VT::Time, N(KncfSlot::SalifetimeMs)),
    plain("salifetime", Validity::CONN, VT::Time, N(KncfSlot::SalifetimeMs)),

    plain("retransmit-timeout", Validity::CONN, VT::Time, N(KncfSlot::RetransmitTimeoutMs)),
    plain("retransmit-interval", Validity::CONN.union(Validity::MILLISECONDS), VT::Time, N(KncfSlot::RetransmitIntervalMs)),

    plain("ikepad", Validity::CONN, VT::Bool, N(KncfSlot::Ikepad)),
    enumed("nat-ikev1-method", Validity::CONN.union(Validity::PROCESSED), VT::Enum, N(KncfSlot::Ikev1Natt), KW_IKEV1NATT_LIST),

    plain("policy-label", Validity::CONN, VT::String, S(KscfSlot::SaSecLabel)), // obsolete variant
    plain("sec-label", Validity::CONN, VT::String, S(KscfSlot::SaSecLabel)),

    enumed("remote-peer-type", Validity::CONN, VT::Enum, N(KncfSlot::Remotepeertype), KW_REMOTE_PEER_TYPE_LIST),
    enumed("remote_peer_type", Validity::CONN, VT::Enum, N(KncfSlot::Remotepeertype), KW_REMOTE_PEER_TYPE_LIST),

    plain("nm-configured", Validity::CONN, VT::Bool, N(KncfSlot::Nmconfigured)),

    enumed("xauthby", Validity::CONN, VT::Enum, N(KncfSlot::Xauthby), KW_XAUTHBY_LIST),
    enumed("xauthfail", Validity::CONN, VT::Enum, N(KncfSlot::Xauthfail), KW_XAUTHFAIL_LIST),
    plain("modecfgpull", Validity::CONN, VT::InvertBool, N(KncfSlot::Modeconfigpull)),
    plain("modecfgdns", Validity::CONN, VT::String, S(KscfSlot::Modecfgdns)),
    plain("modecfgdomains", Validity::CONN, VT::String, S(KscfSlot::Modecfgdomains)),
    plain("modecfgbanner", Validity::CONN, VT::String, S(KscfSlot::Modecfgbanner)),
    plain("ignore-peer-dns", Validity::CONN, VT::Bool, N(KncfSlot::IgnorePeerDns)),
    plain("mark", Validity::CONN, VT::String, S(KscfSlot::ConnMarkBoth)),
    plain("mark-in", Validity::CONN, VT::String, S(KscfSlot::ConnMarkIn)),
    plain("mark-out", Validity::CONN, VT::String, S(KscfSlot::ConnMarkOut)),
    plain("vti-interface", Validity::CONN, VT::String, S(KscfSlot::VtiIface)),
    plain("vti-routing", Validity::CONN, VT::Bool, N(KncfSlot::VtiRouting)),
    plain("vti-shared", Validity::CONN, VT::Bool, N(KncfSlot::VtiShared)),
    enumed("ipsec-interface", Validity::CONN, VT::LooseEnum, N(KncfSlot::XfrmIfId), KW_YNDEV_LIST),

    enumed("nic-offload", Validity::CONN, VT::Enum, N(KncfSlot::NicOffload), KW_YNA_LIST),

    enumed("encapsulation", Validity::CONN, VT::Enum, N(KncfSlot::Encaps), KW_YNA_LIST),
    plain("forceencaps", Validity::CONN, VT::Obsolete, N(KncfSlot::Warnignore)),

    plain("overlapip", Validity::CONN, VT::Bool, N(KncfSlot::Overlapip)),
    plain("reauth", Validity::CONN, VT::Bool, N(KncfSlot::Reauth)),
    plain("rekey", Validity::CONN, VT::Bool, N(KncfSlot::Rekey)),
    plain("rekeymargin", Validity::CONN, VT::Time, N(KncfSlot::RekeymarginMs)),
    plain("rekeyfuzz", Validity::CONN, VT::Percent, N(KncfSlot::Rekeyfuzz)),
    plain("keyingtries", Validity::CONN, VT::Number, N(KncfSlot::Keyingtries)),
    plain("replay-window", Validity::CONN, VT::Number, N(KncfSlot::ReplayWindow)),
    plain("ikelifetime", Validity::CONN, VT::Time, N(KncfSlot::IkelifetimeMs)),
    enumed("failureshunt", Validity::CONN, VT::Enum, N(KncfSlot::Failureshunt), KW_FAILURESHUNT_LIST),
    enumed("negotiationshunt", Validity::CONN, VT::Enum, N(KncfSlot::Negotiationshunt), KW_NEGOTIATIONSHUNT_LIST),

    enumed("enable-tcp", Validity::CONN, VT::Enum, N(KncfSlot::Tcp), KW_TCP_LIST),
    plain("tcp-remoteport", Validity::CONN, VT::Number, N(KncfSlot::RemoteTcpport)),

    plain("connalias", Validity::CONN.union(Validity::PROCESSED), VT::AppendString, S(KscfSlot::Connalias)),

    // attributes of the phase2 policy
    plain("esp", Validity::CONN, VT::String, S(KscfSlot::Esp)),
    plain("ah", Validity::CONN, VT::String, S(KscfSlot::Esp)),
    plain("phase2alg", Validity::CONN.union(Validity::ALIAS), VT::String, S(KscfSlot::Esp)), // obsolete

    enumed("phase2", Validity::CONN.union(Validity::POLICY), VT::Enum, N(KncfSlot::Phase2), KW_PHASE2TYPES_LIST),

    plain("compress", Validity::CONN, VT::Bool, N(KncfSlot::Compress)),

    // route metric
    plain("metric", Validity::CONN, VT::Number, N(KncfSlot::Metric)),

    // DPD
    plain("dpddelay", Validity::CONN, VT::Time, N(KncfSlot::DpddelayMs)),
    plain("dpdtimeout", Validity::CONN, VT::Time, N(KncfSlot::DpdtimeoutMs)),
    enumed("dpdaction", Validity::CONN, VT::Enum, N(KncfSlot::Dpdaction), KW_DPDACTION_LIST),

    enumed("sendca", Validity::CONN, VT::Enum, N(KncfSlot::SendCa), KW_SENDCA_LIST),

    plain("mtu", Validity::CONN, VT::Number, N(KncfSlot::Connmtu)),
    plain("priority", Validity::CONN, VT::Number, N(KncfSlot::Priority)),
    plain("tfc", Validity::CONN, VT::Number, N(KncfSlot::Tfcpad)),
    plain("reqid", Validity::CONN, VT::Number, N(KncfSlot::Reqid)),
    plain("nflog", Validity::CONN, VT::Number, N(KncfSlot::NflogConn)),

    plain("aggressive", Validity::CONN, VT::InvertBool, N(KncfSlot::Aggrmode)),
    plain("aggrmode", Validity::CONN.union(Validity::ALIAS), VT::InvertBool, N(KncfSlot::Aggrmode)), // undocumented compatibility alias
];

/// The single distinguished comment keyword: any identifier beginning `x-`
/// or `x_` is accepted without a table entry (see the lookup algorithm);
/// this descriptor is what `lookup` hands back for it.
pub static COMMENT_KEYWORD: KeywordDef = plain("x-comment", Validity::CONN, VT::Comment, S(KscfSlot::Also));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dns_match_id_trailing_comma_never_matches() {
        assert!(KEYWORDS.iter().any(|k| k.name == "dns-match-id,"));
        assert!(!KEYWORDS.iter().any(|k| k.name == "dns-match-id"));
    }

    #[test]
    fn every_name_is_lowercase_or_symbolic() {
        for k in KEYWORDS {
            assert_eq!(k.name, k.name.to_ascii_lowercase());
        }
    }
}

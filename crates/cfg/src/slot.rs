//! Destination slot tags.
//!
//! Four disjoint families, matching the four integer spaces of the original
//! table: `KBF_*` (global boolean/number), `KSF_*` (global string), `KNCF_*`
//! (connection number), `KSCF_*` (connection string). Tags are stable names,
//! not positions, so tests can index decoded records by tag.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KbfSlot {
    GlobalIkev1,
    CurlTimeoutMs,
    Plutodebug,
    Logtime,
    Logappend,
    Logip,
    AuditLog,
    DoDnssec,
    Uniqueids,
    ShuntlifetimeMs,
    CrlStrict,
    CrlCheckintervalMs,
    OcspStrict,
    OcspEnable,
    OcspTimeout,
    OcspCacheSize,
    OcspCacheMinAgeMs,
    OcspCacheMaxAgeMs,
    OcspMethod,
    DdosMode,
    Seccomp,
    DdosIkeThreshold,
    MaxHalfopenIke,
    Ikebuf,
    IkeErrqueue,
    NflogAll,
    Xfrmlifetime,
    Seedbits,
    Keepalive,
    ListenTcp,
    ListenUdp,
    Nhelpers,
    DropOppoNull,
    Secctx,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KsfSlot {
    Interfaces,
    CurlIface,
    Myvendorid,
    Syslog,
    Logfile,
    Dumpdir,
    Ipsecdir,
    Nssdir,
    Secretsfile,
    Statsbinary,
    GlobalRedirect,
    GlobalRedirectTo,
    OcspUri,
    OcspTrustname,
    Virtualprivate,
    Listen,
    Protostack,
    PlutoDnssecRootkeyFile,
    PlutoDnssecAnchors,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KncfSlot {
    Ikeport,
    Sendcert,
    Xauthserver,
    Xauthclient,
    Modeconfigserver,
    Modeconfigclient,
    Auth,
    Cat,
    Eap,
    Auto,
    Hostaddrfamily,
    Clientaddrfamily,
    Type,
    Keyexchange,
    Ikev2,
    Ppk,
    Intermediate,
    Esn,
    DecapDscp,
    Nopmtudisc,
    IkeFrag,
    Mobike,
    Ikev2AllowNarrowing,
    Ikev2PamAuthorize,
    SendRedirect,
    AcceptRedirect,
    Pfs,
    NatKeepalive,
    InitialContact,
    CiscoUnity,
    NoEspTfc,
    VidStrongswan,
    SendVendorid,
    Sha2Truncbug,
    MsdhDowngrade,
    SanOnCert,
    DnsMatchId,
    SalifetimeMs,
    RetransmitTimeoutMs,
    RetransmitIntervalMs,
    Ikepad,
    Ikev1Natt,
    Remotepeertype,
    Nmconfigured,
    Xauthby,
    Xauthfail,
    Modeconfigpull,
    IgnorePeerDns,
    VtiRouting,
    VtiShared,
    XfrmIfId,
    NicOffload,
    Encaps,
    Warnignore,
    Overlapip,
    Reauth,
    Rekey,
    RekeymarginMs,
    Rekeyfuzz,
    Keyingtries,
    ReplayWindow,
    IkelifetimeMs,
    Failureshunt,
    Negotiationshunt,
    Tcp,
    RemoteTcpport,
    Phase2,
    Compress,
    Metric,
    DpddelayMs,
    DpdtimeoutMs,
    Dpdaction,
    SendCa,
    Connmtu,
    Priority,
    Tfcpad,
    Reqid,
    NflogConn,
    Aggrmode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KscfSlot {
    Ip,
    Subnet,
    Subnets,
    Sourceip,
    VtiIp,
    Nexthop,
    Updown,
    Id,
    Rsasigkey,
    Cert,
    Ckaid,
    Ca,
    Username,
    Addresspool,
    Protoport,
    Also,
    Alsoflip,
    Ike,
    Authby,
    RedirectTo,
    AcceptRedirectTo,
    SaSecLabel,
    Connalias,
    Esp,
    Modecfgdns,
    Modecfgdomains,
    Modecfgbanner,
    ConnMarkBoth,
    ConnMarkIn,
    ConnMarkOut,
    VtiIface,
}

/// One of the four slot families a descriptor may target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    GlobalNumber(KbfSlot),
    GlobalString(KsfSlot),
    ConnNumber(KncfSlot),
    ConnString(KscfSlot),
}

//! Value decoders: turning the raw right-hand-side string of a keyword into
//! a typed value, dispatched on [`crate::value_type::ValueType`].

use std::net::IpAddr;
use std::str::FromStr;

use ipnet::IpNet;

use crate::error::{ParseError, ParseErrorKind};
use crate::modifiers::ModifierDict;
use crate::sparse::{sparse_lookup, SparseName};

/// Outcome of decoding a loose-enum value: either a known enumerator, or an
/// arbitrary string the caller is expected to interpret itself downstream.
///
/// Replaces the sentinel-number-plus-stashed-string scheme: no numeric value
/// can ever collide with a legitimate enumerator because the two cases are
/// distinct variants, not overlapping ranges of the same field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LooseEnumOutcome {
    Known(u32),
    StringFallback(String),
}

/// How a subnet decoder handles host-part bits set beyond the mask.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubnetPolicy {
    /// Silently clear the host-part bits (`10.0.0.5/24` becomes `10.0.0.0/24`).
    Zero,
    /// Reject the value outright.
    Strict,
}

/// An address range, as produced by `addresspool=` and similar keywords.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AddrRange {
    pub start: IpAddr,
    pub end: IpAddr,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DecodedValue {
    Str(String),
    AppendStr(Vec<String>),
    Bool(bool),
    Number(i64),
    /// Always normalized to milliseconds, regardless of the unit suffix
    /// the input used.
    MillisTime(u64),
    /// Tenths of a percent, so `50%` and `50.0%` both round-trip exactly.
    PercentTenths(u32),
    Enum(u32),
    LooseEnum(LooseEnumOutcome),
    ModifierSet(u32),
    EnumList(u32),
    Subnet(IpNet),
    IpAddr(IpAddr),
    Range(AddrRange),
    /// A value accepted syntactically but no longer acted on.
    Obsolete,
    /// An `x-...`/`X_...` comment line; the content is discarded.
    Comment,
    /// A decoded `protoport=` value: `None` in either field means `%any`.
    Protoport { proto: Option<u16>, port: Option<u16> },
}

fn invalid(name: &str, piece: &str) -> ParseErrorKind {
    ParseErrorKind::InvalidValue { name: name.to_string(), piece: piece.to_string() }
}

pub fn decode_bool(name: &str, raw: &str) -> Result<bool, ParseErrorKind> {
    match raw.to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" | "on" => Ok(true),
        "no" | "false" | "0" | "off" => Ok(false),
        _ => Err(invalid(name, raw)),
    }
}

pub fn decode_number(name: &str, raw: &str) -> Result<i64, ParseErrorKind> {
    raw.trim().parse::<i64>().map_err(|_| invalid(name, raw))
}

/// Parse a time value with an optional unit suffix (`s`, `ms`, `m`, `h`,
/// `d`; a bare number is seconds) and normalize to milliseconds.
pub fn decode_time_millis(name: &str, raw: &str) -> Result<u64, ParseErrorKind> {
    let raw = raw.trim();
    let (digits, unit_ms): (&str, u64) = if let Some(d) = raw.strip_suffix("ms") {
        (d, 1)
    } else if let Some(d) = raw.strip_suffix('s') {
        (d, 1_000)
    } else if let Some(d) = raw.strip_suffix('m') {
        (d, 60_000)
    } else if let Some(d) = raw.strip_suffix('h') {
        (d, 3_600_000)
    } else if let Some(d) = raw.strip_suffix('d') {
        (d, 86_400_000)
    } else {
        (raw, 1_000)
    };
    let value: u64 = digits.trim().parse().map_err(|_| invalid(name, raw))?;
    value.checked_mul(unit_ms).ok_or_else(|| invalid(name, raw))
}

/// Parse a percentage such as `150%` or `150` into tenths of a percent.
pub fn decode_percent_tenths(name: &str, raw: &str) -> Result<u32, ParseErrorKind> {
    let digits = raw.trim().strip_suffix('%').unwrap_or(raw.trim());
    let whole: u32 = digits.parse().map_err(|_| invalid(name, raw))?;
    whole.checked_mul(10).ok_or_else(|| invalid(name, raw))
}

pub fn decode_enum(name: &str, raw: &str, table: &[SparseName]) -> Result<u32, ParseErrorKind> {
    sparse_lookup(table, raw).ok_or_else(|| invalid(name, raw))
}

/// Decode a loose-enum: a known name/number from `table` if present,
/// otherwise the literal string, no error either way.
pub fn decode_loose_enum(raw: &str, table: &[SparseName]) -> LooseEnumOutcome {
    match sparse_lookup(table, raw) {
        Some(value) => LooseEnumOutcome::Known(value),
        None => match raw.parse::<u32>() {
            Ok(n) => LooseEnumOutcome::Known(n),
            Err(_) => LooseEnumOutcome::StringFallback(raw.to_string()),
        },
    }
}

fn split_pieces(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c == ',' || c == ':' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Decode a modifier-set (e.g. `plutodebug=all,no-crypt`): a comma/space
/// separated list of dictionary names, each optionally `no-`-prefixed to
/// clear rather than set its bit. `all` sets every bit the dictionary
/// defines.
pub fn decode_modifier_set(name: &str, raw: &str, dict: &ModifierDict) -> Result<u32, ParseErrorKind> {
    let mut mask = 0u32;
    for piece in split_pieces(raw) {
        if piece.eq_ignore_ascii_case("all") {
            mask |= dict.all_mask;
            continue;
        }
        if let Some(rest) = piece.strip_prefix("no-").or_else(|| piece.strip_prefix("no_")) {
            let bit = dict.lookup(rest).ok_or_else(|| invalid(name, piece))?;
            mask &= !bit;
        } else {
            let bit = dict.lookup(piece).ok_or_else(|| invalid(name, piece))?;
            mask |= bit;
        }
    }
    Ok(mask)
}

/// Decode a multi-enum-list (e.g. `phase2=esp,ah`): pieces OR together their
/// matching bits. `allow_list` mirrors the original's per-keyword
/// restriction to a single value; a multi-piece input against a
/// single-valued keyword is an error, not a silent OR.
pub fn decode_enum_list(
    name: &str,
    raw: &str,
    table: &[SparseName],
    allow_list: bool,
) -> Result<u32, ParseErrorKind> {
    let pieces = split_pieces(raw);
    if pieces.len() > 1 && !allow_list {
        return Err(ParseErrorKind::NotAList { name: name.to_string() });
    }
    let mut mask = 0u32;
    for piece in pieces {
        mask |= sparse_lookup(table, piece).ok_or_else(|| invalid(name, piece))?;
    }
    Ok(mask)
}

/// Decode a subnet, applying the host-part-bits policy the keyword
/// descriptor carries: `Strict` rejects a value with any host-part bit set
/// beyond the mask ("improper subnet, host-part bits on"); `Zero` silently
/// clears them.
pub fn decode_subnet(name: &str, raw: &str, policy: SubnetPolicy) -> Result<IpNet, ParseErrorKind> {
    let net = IpNet::from_str(raw.trim()).map_err(|_| invalid(name, raw))?;
    let truncated = net.trunc();
    if truncated == net {
        return Ok(net);
    }
    match policy {
        SubnetPolicy::Strict => Err(invalid(name, raw)),
        SubnetPolicy::Zero => Ok(truncated),
    }
}

pub fn decode_ip_addr(name: &str, raw: &str) -> Result<IpAddr, ParseErrorKind> {
    IpAddr::from_str(raw.trim()).map_err(|_| invalid(name, raw))
}

/// Decode an address range (`first-last` or a bare CIDR block, expanded to
/// its first/last host).
pub fn decode_range(name: &str, raw: &str) -> Result<AddrRange, ParseErrorKind> {
    let raw = raw.trim();
    if let Some((lo, hi)) = raw.split_once('-') {
        let start = IpAddr::from_str(lo.trim()).map_err(|_| invalid(name, raw))?;
        let end = IpAddr::from_str(hi.trim()).map_err(|_| invalid(name, raw))?;
        return Ok(AddrRange { start, end });
    }
    let net = IpNet::from_str(raw).map_err(|_| invalid(name, raw))?;
    Ok(AddrRange { start: net.network(), end: net.broadcast() })
}

fn lookup_proto_name(name: &str) -> Option<u16> {
    match name.to_ascii_lowercase().as_str() {
        "icmp" => Some(1),
        "tcp" => Some(6),
        "udp" => Some(17),
        "ipv6-icmp" | "icmpv6" => Some(58),
        "sctp" => Some(132),
        _ => None,
    }
}

/// Decode a `protoport=` value (`tcp/80`, `17/80`, `udp`, `%any/%any`) into a
/// protocol/port pair. Either half may be `%any` (or, for the protocol, `0`),
/// which decodes to `None`. A bare protocol with no `/port` is the same as
/// `/%any`.
pub fn decode_protoport(name: &str, raw: &str) -> Result<(Option<u16>, Option<u16>), ParseErrorKind> {
    let raw = raw.trim();
    let (proto_piece, port_piece) = match raw.split_once('/') {
        Some((p, port)) => (p, Some(port)),
        None => (raw, None),
    };
    let proto_piece = proto_piece.trim();
    let proto = if proto_piece == "%any" || proto_piece == "0" {
        None
    } else if let Some(n) = lookup_proto_name(proto_piece) {
        Some(n)
    } else {
        let n: u16 = proto_piece.parse().map_err(|_| invalid(name, raw))?;
        if n == 0 {
            None
        } else {
            Some(n)
        }
    };
    let port = match port_piece {
        None | Some("%any") => None,
        Some(p) => {
            let p = p.trim();
            if p == "%any" {
                None
            } else {
                Some(p.parse::<u16>().map_err(|_| invalid(name, raw))?)
            }
        }
    };
    Ok((proto, port))
}

pub fn as_parse_error(file: &str, line: u32, kind: ParseErrorKind) -> ParseError {
    ParseError::new(file, line, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparse::KW_FAILURESHUNT_LIST;

    #[test]
    fn bool_accepts_yes_no() {
        assert_eq!(decode_bool("x", "yes"), Ok(true));
        assert_eq!(decode_bool("x", "no"), Ok(false));
        assert!(decode_bool("x", "maybe").is_err());
    }

    #[test]
    fn time_normalizes_to_milliseconds() {
        assert_eq!(decode_time_millis("x", "5").unwrap(), 5_000);
        assert_eq!(decode_time_millis("x", "5s").unwrap(), 5_000);
        assert_eq!(decode_time_millis("x", "2m").unwrap(), 120_000);
        assert_eq!(decode_time_millis("x", "1h").unwrap(), 3_600_000);
        assert_eq!(decode_time_millis("x", "250ms").unwrap(), 250);
    }

    #[test]
    fn percent_to_tenths() {
        assert_eq!(decode_percent_tenths("x", "100%").unwrap(), 1000);
        assert_eq!(decode_percent_tenths("x", "150").unwrap(), 1500);
    }

    #[test]
    fn loose_enum_falls_back_to_string() {
        assert_eq!(
            decode_loose_enum("totally-unknown-host", &[]),
            LooseEnumOutcome::StringFallback("totally-unknown-host".into())
        );
    }

    #[test]
    fn modifier_set_all_and_negation() {
        use crate::modifiers::DEBUG_MODIFIERS;
        let mask = decode_modifier_set("plutodebug", "all,no-crypt", &DEBUG_MODIFIERS).unwrap();
        assert_eq!(mask, DEBUG_MODIFIERS.all_mask & !crate::modifiers::DBG_CRYPT);
    }

    #[test]
    fn enum_list_rejects_multiple_values_when_not_a_list() {
        let err = decode_enum_list("failureshunt", "drop,reject", KW_FAILURESHUNT_LIST, false);
        assert!(matches!(err, Err(ParseErrorKind::NotAList { .. })));
    }

    #[test]
    fn enum_list_ors_when_allowed() {
        use crate::sparse::KW_PHASE2TYPES_LIST;
        let mask = decode_enum_list("phase2", "esp,ah", KW_PHASE2TYPES_LIST, true).unwrap();
        assert_eq!(mask, crate::sparse::POLICY_ENCRYPT | crate::sparse::POLICY_AUTHENTICATE);
    }

    #[test]
    fn subnet_strict_rejects_host_bits() {
        let err = decode_subnet("subnet", "10.0.0.5/24", SubnetPolicy::Strict);
        assert!(matches!(err, Err(ParseErrorKind::InvalidValue { .. })));
    }

    #[test]
    fn subnet_zero_clears_host_bits() {
        let net = decode_subnet("subnet", "10.0.0.5/24", SubnetPolicy::Zero).unwrap();
        assert_eq!(net, IpNet::from_str("10.0.0.0/24").unwrap());
    }

    #[test]
    fn subnet_without_host_bits_is_unaffected_by_policy() {
        let net = decode_subnet("subnet", "10.0.0.0/24", SubnetPolicy::Strict).unwrap();
        assert_eq!(net, IpNet::from_str("10.0.0.0/24").unwrap());
    }

    #[test]
    fn protoport_decodes_name_and_port() {
        assert_eq!(decode_protoport("protoport", "tcp/80").unwrap(), (Some(6), Some(80)));
        assert_eq!(decode_protoport("protoport", "17/80").unwrap(), (Some(17), Some(80)));
    }

    #[test]
    fn protoport_bare_protocol_means_any_port() {
        assert_eq!(decode_protoport("protoport", "udp").unwrap(), (Some(17), None));
    }

    #[test]
    fn protoport_any_means_wildcard() {
        assert_eq!(decode_protoport("protoport", "%any/%any").unwrap(), (None, None));
        assert_eq!(decode_protoport("protoport", "0/0").unwrap(), (None, None));
    }

    #[test]
    fn protoport_rejects_garbage() {
        assert!(decode_protoport("protoport", "not-a-protocol/80").is_err());
        assert!(decode_protoport("protoport", "tcp/not-a-port").is_err());
    }

    #[test]
    fn range_accepts_dash_and_cidr() {
        let r = decode_range("x", "10.0.0.5-10.0.0.20").unwrap();
        assert_eq!(r.start, IpAddr::from_str("10.0.0.5").unwrap());
        let r = decode_range("x", "10.0.0.0/24").unwrap();
        assert_eq!(r.end, IpAddr::from_str("10.0.0.255").unwrap());
    }
}

//! The config assembler: turns a lexed `ipsec.conf` into a [`ConfigFile`].
//!
//! This stays deliberately agnostic of the text grammar (comment stripping,
//! continuation lines, indentation-based section membership) and starts
//! from an already-split [`RawFile`]. Given one, it performs the steps the
//! original assembler performs in order: keyword lookup, scope rejection,
//! value decoding, slot routing (including left/right narrowing), and
//! finally `also=`/`alsoflip=` resolution across the whole file.

use foldhash::HashMap;

use crate::decode::{
    decode_bool, decode_enum, decode_enum_list, decode_loose_enum, decode_modifier_set, decode_number,
    decode_percent_tenths, decode_protoport, decode_range, decode_subnet, decode_time_millis, DecodedValue,
};
use crate::error::{ParseError, ParseErrorKind};
use crate::keyword::KeywordDef;
use crate::lookup::{lookup, Side};
use crate::record::{ConfigFile, ConnectionRecord, EndpointRecord, GlobalConfig};
use crate::slot::Slot;
use crate::validity::Validity;
use crate::value_type::ValueType;

/// One `name=value` line, already split out of its section.
#[derive(Clone, Debug)]
pub struct RawEntry {
    pub name: String,
    pub value: String,
    pub line: u32,
}

#[derive(Clone, Debug)]
pub enum SectionKind {
    ConfigSetup,
    Conn(String),
}

#[derive(Clone, Debug)]
pub struct RawSection {
    pub kind: SectionKind,
    pub entries: Vec<RawEntry>,
}

#[derive(Clone, Debug, Default)]
pub struct RawFile {
    pub sections: Vec<RawSection>,
}

fn err(file: &str, line: u32, kind: ParseErrorKind) -> ParseError {
    ParseError::new(file, line, kind)
}

/// multi-enum-list keywords accept a comma-separated list; every other
/// `Enum`-typed keyword accepts exactly one value. The only current
/// multi-valued keyword is `phase2=`.
fn allows_list(kw: &KeywordDef) -> bool {
    kw.slot == Slot::ConnNumber(crate::slot::KncfSlot::Phase2)
}

fn decode_value(file: &str, line: u32, kw: &KeywordDef, raw: &str) -> Result<DecodedValue, ParseError> {
    let kind = |k| err(file, line, k);
    match kw.value_type {
        ValueType::String | ValueType::Filename | ValueType::Dirname | ValueType::IdType | ValueType::RsaSigKey => {
            Ok(DecodedValue::Str(raw.to_string()))
        }
        ValueType::AppendString | ValueType::AppendList => Ok(DecodedValue::AppendStr(
            raw.split(',').map(|piece| piece.trim().to_string()).filter(|p| !p.is_empty()).collect(),
        )),
        ValueType::Bool => decode_bool(&kw.name, raw).map(DecodedValue::Bool).map_err(kind),
        ValueType::InvertBool => decode_bool(&kw.name, raw).map(|b| DecodedValue::Bool(!b)).map_err(kind),
        ValueType::Number => decode_number(&kw.name, raw).map(DecodedValue::Number).map_err(kind),
        ValueType::Time => decode_time_millis(&kw.name, raw).map(DecodedValue::MillisTime).map_err(kind),
        ValueType::Percent => decode_percent_tenths(&kw.name, raw).map(DecodedValue::PercentTenths).map_err(kind),
        ValueType::Enum => {
            let table = kw.sparse.unwrap_or(&[]);
            if allows_list(kw) {
                decode_enum_list(&kw.name, raw, table, true).map(DecodedValue::EnumList).map_err(kind)
            } else {
                decode_enum(&kw.name, raw, table).map(DecodedValue::Enum).map_err(kind)
            }
        }
        ValueType::LooseEnum => {
            let table = kw.sparse.unwrap_or(&[]);
            Ok(DecodedValue::LooseEnum(decode_loose_enum(raw, table)))
        }
        ValueType::ModifierSet => {
            let dict = kw.modifiers.expect("modifier-set keyword without a dictionary");
            decode_modifier_set(&kw.name, raw, dict).map(DecodedValue::ModifierSet).map_err(kind)
        }
        ValueType::Subnet => decode_subnet(&kw.name, raw, kw.subnet_policy).map(DecodedValue::Subnet).map_err(kind),
        ValueType::IpAddr => crate::decode::decode_ip_addr(&kw.name, raw).map(DecodedValue::IpAddr).map_err(kind),
        ValueType::Range => decode_range(&kw.name, raw).map(DecodedValue::Range).map_err(kind),
        ValueType::Protoport => {
            decode_protoport(&kw.name, raw).map(|(proto, port)| DecodedValue::Protoport { proto, port }).map_err(kind)
        }
        ValueType::Obsolete => Ok(DecodedValue::Obsolete),
        ValueType::Comment => Ok(DecodedValue::Comment),
    }
}

/// Route a decoded value into `slot` of `map`. `AppendString`/`AppendList`
/// values accumulate across repeated occurrences of the same keyword
/// instead of overwriting; any other value type overwrites only when the
/// descriptor is `Validity::DUPLICATE_OK`, otherwise a second occurrence is
/// a fatal `DuplicateKeyword` error.
fn route_entry<K: Eq + std::hash::Hash>(
    map: &mut HashMap<K, DecodedValue>,
    slot: K,
    value: DecodedValue,
    kw: &KeywordDef,
    file: &str,
    line: u32,
) -> Result<(), ParseError> {
    use std::collections::hash_map::Entry;
    match map.entry(slot) {
        Entry::Vacant(v) => {
            v.insert(value);
            Ok(())
        }
        Entry::Occupied(mut o) => {
            let both_append =
                matches!(o.get(), DecodedValue::AppendStr(_)) && matches!(value, DecodedValue::AppendStr(_));
            if both_append {
                if let DecodedValue::AppendStr(mut new_items) = value {
                    if let DecodedValue::AppendStr(existing) = o.get_mut() {
                        existing.append(&mut new_items);
                    }
                }
                return Ok(());
            }
            if kw.validity.contains(Validity::DUPLICATE_OK) {
                o.insert(value);
                return Ok(());
            }
            Err(err(file, line, ParseErrorKind::DuplicateKeyword { name: kw.name.to_string() }))
        }
    }
}

fn assemble_config_setup(file: &str, entries: &[RawEntry]) -> Result<GlobalConfig, ParseError> {
    let mut cfg = GlobalConfig::default();
    for entry in entries {
        let (kw, _side) = lookup(&entry.name).ok_or_else(|| {
            err(file, entry.line, ParseErrorKind::UnknownKeyword { name: entry.name.clone() })
        })?;
        if !kw.validity.contains(Validity::CONFIG) {
            return Err(err(file, entry.line, ParseErrorKind::WrongScope { name: entry.name.clone() }));
        }
        let value = decode_value(file, entry.line, kw, &entry.value)?;
        match kw.slot {
            Slot::GlobalNumber(slot) => route_entry(&mut cfg.numbers, slot, value, kw, file, entry.line)?,
            Slot::GlobalString(slot) => route_entry(&mut cfg.strings, slot, value, kw, file, entry.line)?,
            _ => unreachable!("config-setup-valid keyword routed to a conn slot"),
        }
    }
    Ok(cfg)
}

fn assemble_connection(file: &str, name: &str, entries: &[RawEntry]) -> Result<ConnectionRecord, ParseError> {
    let mut record = ConnectionRecord::new(name);
    for entry in entries {
        let (kw, side) = lookup(&entry.name).ok_or_else(|| {
            err(file, entry.line, ParseErrorKind::UnknownKeyword { name: entry.name.clone() })
        })?;
        if !kw.validity.contains(Validity::CONN) {
            return Err(err(file, entry.line, ParseErrorKind::WrongScope { name: entry.name.clone() }));
        }
        let value = decode_value(file, entry.line, kw, &entry.value)?;
        match (kw.slot, side) {
            (Slot::ConnNumber(slot), Side::None) => {
                route_entry(&mut record.numbers, slot, value, kw, file, entry.line)?
            }
            (Slot::ConnString(slot), Side::None) => {
                route_entry(&mut record.strings, slot, value, kw, file, entry.line)?
            }
            (Slot::ConnString(slot), Side::Left) => {
                route_entry(&mut record.this.strings, slot, value, kw, file, entry.line)?
            }
            (Slot::ConnString(slot), Side::Right) => {
                route_entry(&mut record.that.strings, slot, value, kw, file, entry.line)?
            }
            (Slot::ConnNumber(_), Side::Left | Side::Right) => {
                unreachable!("no leftright keyword currently routes to a KNCF slot")
            }
            (Slot::GlobalNumber(_), _) | (Slot::GlobalString(_), _) => {
                unreachable!("conn-valid keyword routed to a global slot")
            }
        }
    }
    Ok(record)
}

/// Resolve `also=`/`alsoflip=` references: every named connection's
/// non-leftright keywords get merged into the referencing connection
/// wherever the referencing connection hasn't already set them itself
/// (first-writer-wins, matching declaration order), and `alsoflip=` merges
/// with `this`/`that` swapped.
fn resolve_also(file: &str, mut records: Vec<ConnectionRecord>) -> Result<Vec<ConnectionRecord>, ParseError> {
    let by_name: HashMap<String, usize> =
        records.iter().enumerate().map(|(i, r)| (r.name.clone(), i)).collect();

    fn collect_refs(record: &ConnectionRecord) -> Vec<(String, bool)> {
        let mut refs = Vec::new();
        if let Some(DecodedValue::AppendStr(names)) = record.strings.get(&crate::slot::KscfSlot::Also) {
            refs.extend(names.iter().cloned().map(|n| (n, false)));
        }
        if let Some(DecodedValue::Str(name)) = record.strings.get(&crate::slot::KscfSlot::Alsoflip) {
            refs.push((name.clone(), true));
        }
        refs
    }

    for i in 0..records.len() {
        let mut path = vec![records[i].name.clone()];
        let mut queue = collect_refs(&records[i]);
        let mut visited: std::collections::HashSet<String> = std::collections::HashSet::new();
        while let Some((target, flipped)) = queue.pop() {
            if !visited.insert(target.clone()) {
                continue;
            }
            if path.contains(&target) {
                path.push(target);
                return Err(err(file, 0, ParseErrorKind::AlsoCycle { path }));
            }
            let &idx = by_name.get(&target).ok_or_else(|| {
                err(file, 0, ParseErrorKind::MissingSection { name: target.clone() })
            })?;
            path.push(target.clone());
            let donor = records[idx].clone();
            {
                let dst = &mut records[i];
                for (slot, value) in &donor.numbers {
                    dst.numbers.entry(*slot).or_insert_with(|| value.clone());
                }
                for (slot, value) in &donor.strings {
                    dst.strings.entry(*slot).or_insert_with(|| value.clone());
                }
                let (dst_this, dst_that) = if flipped { (&mut dst.that, &mut dst.this) } else { (&mut dst.this, &mut dst.that) };
                for (slot, value) in &donor.this.strings {
                    dst_this.strings.entry(*slot).or_insert_with(|| value.clone());
                }
                for (slot, value) in &donor.that.strings {
                    dst_that.strings.entry(*slot).or_insert_with(|| value.clone());
                }
            }
            queue.extend(collect_refs(&donor));
        }
    }
    Ok(records)
}

pub fn assemble(file: &str, raw: &RawFile) -> Result<ConfigFile, ParseError> {
    let mut config_setup = GlobalConfig::default();
    let mut connections = Vec::new();
    for section in &raw.sections {
        match &section.kind {
            SectionKind::ConfigSetup => {
                config_setup = assemble_config_setup(file, &section.entries)?;
            }
            SectionKind::Conn(name) => {
                connections.push(assemble_connection(file, name, &section.entries)?);
            }
        }
    }
    let connections = resolve_also(file, connections)?;
    Ok(ConfigFile { config_setup, connections })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: &str) -> RawEntry {
        RawEntry { name: name.to_string(), value: value.to_string(), line: 1 }
    }

    #[test]
    fn routes_leftright_keyword_to_the_right_endpoint() {
        let raw = RawFile {
            sections: vec![RawSection {
                kind: SectionKind::Conn("test".into()),
                entries: vec![entry("leftsubnet", "10.0.0.0/24"), entry("rightsubnet", "10.0.1.0/24")],
            }],
        };
        let file = assemble("test.conf", &raw).unwrap();
        let conn = &file.connections[0];
        assert!(matches!(conn.this.get(crate::slot::KscfSlot::Subnet), Some(DecodedValue::Subnet(_))));
        assert!(matches!(conn.that.get(crate::slot::KscfSlot::Subnet), Some(DecodedValue::Subnet(_))));
    }

    #[test]
    fn config_setup_keyword_rejected_inside_conn() {
        let raw = RawFile {
            sections: vec![RawSection {
                kind: SectionKind::Conn("test".into()),
                entries: vec![entry("syslog", "daemon.error")],
            }],
        };
        let result = assemble("test.conf", &raw);
        assert!(matches!(result, Err(ParseError { kind: ParseErrorKind::WrongScope { .. }, .. })));
    }

    #[test]
    fn also_merges_without_overwriting_local_values() {
        let raw = RawFile {
            sections: vec![
                RawSection {
                    kind: SectionKind::Conn("base".into()),
                    entries: vec![entry("authby", "secret"), entry("ikelifetime", "1h")],
                },
                RawSection {
                    kind: SectionKind::Conn("derived".into()),
                    entries: vec![entry("also", "base"), entry("ikelifetime", "30m")],
                },
            ],
        };
        let file = assemble("test.conf", &raw).unwrap();
        let derived = file.connections.iter().find(|c| c.name == "derived").unwrap();
        assert!(matches!(derived.string(crate::slot::KscfSlot::Authby), Some(DecodedValue::Str(s)) if s == "secret"));
        assert!(matches!(derived.number(crate::slot::KncfSlot::IkelifetimeMs), Some(DecodedValue::MillisTime(ms)) if *ms == 1_800_000));
    }

    #[test]
    fn repeated_also_accumulates_instead_of_overwriting() {
        let raw = RawFile {
            sections: vec![RawSection {
                kind: SectionKind::Conn("test".into()),
                entries: vec![entry("also", "a"), entry("also", "b")],
            }],
        };
        let file = assemble("test.conf", &raw).unwrap();
        let conn = &file.connections[0];
        assert!(
            matches!(conn.string(crate::slot::KscfSlot::Also), Some(DecodedValue::AppendStr(v)) if v == &["a", "b"])
        );
    }

    #[test]
    fn repeated_scalar_keyword_without_duplicate_ok_is_an_error() {
        let raw = RawFile {
            sections: vec![RawSection {
                kind: SectionKind::Conn("test".into()),
                entries: vec![entry("ikelifetime", "1h"), entry("ikelifetime", "2h")],
            }],
        };
        let result = assemble("test.conf", &raw);
        assert!(matches!(result, Err(ParseError { kind: ParseErrorKind::DuplicateKeyword { .. }, .. })));
    }

    #[test]
    fn protoport_is_decoded_into_a_proto_port_pair() {
        let raw = RawFile {
            sections: vec![RawSection {
                kind: SectionKind::Conn("test".into()),
                entries: vec![entry("leftprotoport", "tcp/80")],
            }],
        };
        let file = assemble("test.conf", &raw).unwrap();
        let conn = &file.connections[0];
        assert!(matches!(
            conn.this.get(crate::slot::KscfSlot::Protoport),
            Some(DecodedValue::Protoport { proto: Some(6), port: Some(80) })
        ));
    }

    #[test]
    fn repeated_duplicate_ok_keyword_overwrites() {
        let raw = RawFile {
            sections: vec![RawSection {
                kind: SectionKind::Conn("test".into()),
                entries: vec![entry("auto", "ignore"), entry("auto", "start")],
            }],
        };
        let file = assemble("test.conf", &raw).unwrap();
        let conn = &file.connections[0];
        assert!(matches!(conn.number(crate::slot::KncfSlot::Auto), Some(DecodedValue::Enum(_))));
    }
}

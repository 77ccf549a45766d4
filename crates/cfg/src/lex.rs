//! A small line-oriented lexer for the `ipsec.conf` section/keyword
//! grammar: `#`-comments, backslash line continuations, and two kinds of
//! section headers (`config setup` and `conn <name>`) whose membership is
//! determined by indentation, the way the format has always worked.

use crate::assemble::{RawEntry, RawFile, SectionKind, RawSection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub line: u32,
    pub message: String,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for LexError {}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Join backslash-continued lines, tracking the starting line number of
/// each logical line for diagnostics.
fn join_continuations(text: &str) -> Vec<(u32, String)> {
    let mut joined = Vec::new();
    let mut pending: Option<(u32, String)> = None;
    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx as u32 + 1;
        let line = strip_comment(raw_line).trim_end();
        let (continues, body) = match line.strip_suffix('\\') {
            Some(body) => (true, body),
            None => (false, line),
        };
        let (start, mut acc) = pending.take().unwrap_or((line_no, String::new()));
        if !acc.is_empty() {
            acc.push(' ');
        }
        acc.push_str(body.trim());
        if continues {
            pending = Some((start, acc));
        } else {
            joined.push((start, acc));
        }
    }
    if let Some(leftover) = pending {
        joined.push(leftover);
    }
    joined
}

pub fn lex(text: &str) -> Result<RawFile, LexError> {
    let mut sections = Vec::new();
    let mut current: Option<RawSection> = None;

    for (line_no, line) in join_continuations(text) {
        if line.trim().is_empty() {
            continue;
        }
        let indented = line.starts_with(' ') || line.starts_with('\t');
        let trimmed = line.trim();

        if !indented {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            let mut words = trimmed.split_whitespace();
            let kind_word = words.next().unwrap_or("");
            let kind = match kind_word {
                "config" => {
                    if words.next() != Some("setup") {
                        return Err(LexError { line: line_no, message: "expected 'config setup'".into() });
                    }
                    SectionKind::ConfigSetup
                }
                "conn" => {
                    let name = words.next().ok_or_else(|| LexError {
                        line: line_no,
                        message: "'conn' requires a name".into(),
                    })?;
                    SectionKind::Conn(name.to_string())
                }
                other => {
                    return Err(LexError { line: line_no, message: format!("unexpected section header: {other}") })
                }
            };
            current = Some(RawSection { kind, entries: Vec::new() });
            continue;
        }

        let Some(section) = current.as_mut() else {
            return Err(LexError { line: line_no, message: "keyword outside of any section".into() });
        };
        let Some((name, value)) = trimmed.split_once('=') else {
            return Err(LexError { line: line_no, message: format!("expected 'keyword=value', found: {trimmed}") });
        };
        section.entries.push(RawEntry {
            name: name.trim().to_string(),
            value: value.trim().to_string(),
            line: line_no,
        });
    }
    if let Some(section) = current.take() {
        sections.push(section);
    }
    Ok(RawFile { sections })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_config_setup_and_conn_sections() {
        let text = "config setup\n\tprotostack=netkey\n\nconn west-east\n\tleftsubnet=10.0.0.0/24\n\trightsubnet=10.0.1.0/24\n";
        let raw = lex(text).unwrap();
        assert_eq!(raw.sections.len(), 2);
        assert!(matches!(raw.sections[0].kind, SectionKind::ConfigSetup));
        assert_eq!(raw.sections[0].entries[0].name, "protostack");
        assert!(matches!(&raw.sections[1].kind, SectionKind::Conn(name) if name == "west-east"));
        assert_eq!(raw.sections[1].entries.len(), 2);
    }

    #[test]
    fn strips_comments_and_joins_continuations() {
        let text = "conn test\n\t# a comment\n\tike=aes256-sha2 \\\n\t    ;modp2048\n";
        let raw = lex(text).unwrap();
        assert_eq!(raw.sections[0].entries[0].value, "aes256-sha2 ;modp2048");
    }

    #[test]
    fn rejects_keyword_before_any_section() {
        let text = "leftsubnet=10.0.0.0/24\n";
        assert!(lex(text).is_err());
    }
}

//! Keyword registry, value decoders, config assembler, and line lexer for
//! the `ipsec.conf`-style grammar: everything from "here is the file's raw
//! text" down to "here is a fully assembled connection record" lives in
//! this crate.

pub mod assemble;
pub mod decode;
pub mod error;
pub mod keyword;
pub mod lex;
pub mod lookup;
pub mod modifiers;
pub mod record;
pub mod slot;
pub mod sparse;
pub mod validity;
pub mod value_type;

pub use assemble::{assemble, RawEntry, RawFile, SectionKind};
pub use error::{ParseError, ParseErrorKind};
pub use keyword::{KeywordDef, KEYWORDS};
pub use lookup::{lookup, Side};
pub use record::{ConfigFile, ConnectionRecord, EndpointRecord, GlobalConfig};

//! The `value_type` field of a keyword descriptor.

/// How a keyword's right-hand side is decoded and stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueType {
    String,
    AppendString,
    AppendList,
    Filename,
    Dirname,
    Bool,
    InvertBool,
    Number,
    Time,
    Percent,
    Enum,
    LooseEnum,
    ModifierSet,
    Subnet,
    IpAddr,
    Range,
    IdType,
    RsaSigKey,
    Protoport,
    Obsolete,
    Comment,
}

impl ValueType {
    /// The token class the (external) lexer/grammar would assign, per the
    /// registry lookup algorithm.
    pub fn token_class(self) -> TokenClass {
        match self {
            ValueType::Percent => TokenClass::PercentWord,
            ValueType::Time => TokenClass::TimeWord,
            ValueType::Bool | ValueType::InvertBool => TokenClass::BoolWord,
            ValueType::Comment => TokenClass::Comment,
            _ => TokenClass::Keyword,
        }
    }
}

/// Token class returned alongside a successful keyword lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenClass {
    PercentWord,
    TimeWord,
    BoolWord,
    Comment,
    Keyword,
}

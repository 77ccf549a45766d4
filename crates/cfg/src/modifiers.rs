//! Modifier dictionaries consulted by the `modifier-set` decoder.
//!
//! A modifier-set value is a comma-separated list of names, each optionally
//! prefixed `no-`, each setting or clearing one bit of a result bitset. `all`
//! is a pseudo-modifier meaning every bit the dictionary knows about.

/// One named bit a modifier-set dictionary recognizes.
#[derive(Copy, Clone, Debug)]
pub struct Modifier {
    pub name: &'static str,
    pub bit: u32,
}

/// A dictionary of modifiers plus the combined mask `all` expands to.
#[derive(Debug)]
pub struct ModifierDict {
    pub modifiers: &'static [Modifier],
    pub all_mask: u32,
}

impl ModifierDict {
    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.modifiers
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .map(|m| m.bit)
    }
}

macro_rules! modifiers {
    ($name:ident: $( $n:expr => $bit:expr ),+ $(,)?) => {
        pub static $name: ModifierDict = ModifierDict {
            modifiers: &[ $( Modifier { name: $n, bit: $bit } ),+ ],
            all_mask: 0 $( | $bit )+,
        };
    };
}

pub const DBG_RAW: u32 = 1 << 0;
pub const DBG_CRYPT: u32 = 1 << 1;
pub const DBG_PARSING: u32 = 1 << 2;
pub const DBG_EMITTING: u32 = 1 << 3;
pub const DBG_CONTROL: u32 = 1 << 4;
pub const DBG_LIFECYCLE: u32 = 1 << 5;
pub const DBG_KERNEL: u32 = 1 << 6;
pub const DBG_DNS: u32 = 1 << 7;
pub const DBG_OPPO: u32 = 1 << 8;
pub const DBG_CONTROLMORE: u32 = 1 << 9;
pub const DBG_PFKEY: u32 = 1 << 10;
pub const DBG_NATT: u32 = 1 << 11;
pub const DBG_X509: u32 = 1 << 12;
pub const DBG_DPD: u32 = 1 << 13;
pub const DBG_PRIVATE: u32 = 1 << 14;
pub const DBG_WHACKWATCH: u32 = 1 << 15;

// Dictionary for `plutodebug=`.
modifiers!(DEBUG_MODIFIERS:
    "raw" => DBG_RAW,
    "crypt" => DBG_CRYPT,
    "parsing" => DBG_PARSING,
    "emitting" => DBG_EMITTING,
    "control" => DBG_CONTROL,
    "lifecycle" => DBG_LIFECYCLE,
    "kernel" => DBG_KERNEL,
    "dns" => DBG_DNS,
    "oppo" => DBG_OPPO,
    "controlmore" => DBG_CONTROLMORE,
    "pfkey" => DBG_PFKEY,
    "nattraversal" => DBG_NATT,
    "x509" => DBG_X509,
    "dpd" => DBG_DPD,
    "private" => DBG_PRIVATE,
    "whackwatch" => DBG_WHACKWATCH,
);

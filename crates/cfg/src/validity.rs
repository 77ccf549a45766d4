//! Validity flags attached to each keyword descriptor.

bitflags::bitflags! {
    /// Subset of scopes and modifiers a keyword descriptor carries.
    ///
    /// Mirrors the `kv_*` flags of the original keyword table: a descriptor
    /// is valid in the global config section, a `conn` section, or both, and
    /// may additionally be leftright-mirrorable, alias-only, in need of a
    /// post-parse hook, repeatable, or millisecond-scaled.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Validity: u16 {
        /// Valid in the global `config setup` section.
        const CONFIG        = 1 << 0;
        /// Valid inside a `conn` section.
        const CONN          = 1 << 1;
        /// May be prefixed with `left`/`right` to address an endpoint.
        const LEFTRIGHT     = 1 << 2;
        /// Contributes to the phase2 policy bitmask rather than a plain slot.
        const POLICY        = 1 << 3;
        /// An alias for another descriptor pointing at the same slot.
        const ALIAS         = 1 << 4;
        /// Needs a slot-specific post-parse normalization hook.
        const PROCESSED     = 1 << 5;
        /// May legally appear more than once without overwriting.
        const DUPLICATE_OK  = 1 << 6;
        /// The decoded time value is already expressed in milliseconds.
        const MILLISECONDS  = 1 << 7;
    }
}

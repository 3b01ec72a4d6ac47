/// Standard base32 alphabet (RFC 4648, section 6).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Standard base32 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Spell-safe base32 alphabet: no vowels, no `0`/`1`/`O`/`I`/`L`, case sensitive.
pub const ALPHABET_SPELL_SAFE: &str = "23456789CFGHJMPQRVWXcfghjmpqrvwx";

/// Spell-safe base32 alphabet as a byte array.
pub const ALPHABET_SPELL_SAFE_BYTES: &[u8; 32] = b"23456789CFGHJMPQRVWXcfghjmpqrvwx";

/// Padding character.
pub const PAD: char = '=';

/// Padding character as a byte.
pub const PAD_BYTE: u8 = b'=';

/// Lowest codepoint covered by the inverse lookup tables.
pub const TABLE_BASE: u8 = b'2';

/// Marks an inverse-table slot that is not part of the alphabet.
pub const INVALID: u8 = 0xff;

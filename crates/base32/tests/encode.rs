//! Tests for base32 encoding.

use rand::Rng;
use vaultbits_base32::{
    create_to_base32, encode, encoded_len, to_base32, to_base32_spell_safe,
    to_base32_spell_safe_unpadded, to_base32_unpadded, Alphabet, AlphabetKind, Base32Options,
};

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    let encode2 = create_to_base32(None);

    for _ in 0..100 {
        let blob = generate_blob();
        let result = to_base32(&blob);
        let result2 = encode2(&blob);

        let expected = base32_encode(&blob);
        assert_eq!(result, expected, "Failed for blob of length {}", blob.len());
        assert_eq!(result2, expected, "Failed for blob of length {}", blob.len());
    }
}

#[test]
fn length_law() {
    for n in 0..64 {
        let blob = vec![0xa5u8; n];
        let unpadded_len = (8 * n).div_ceil(5);
        let padded_len = unpadded_len.div_ceil(8) * 8;
        assert_eq!(to_base32_unpadded(&blob).len(), unpadded_len);
        assert_eq!(to_base32(&blob).len(), padded_len);
        assert_eq!(to_base32_spell_safe_unpadded(&blob).len(), unpadded_len);
        assert_eq!(to_base32_spell_safe(&blob).len(), padded_len);
        assert_eq!(encoded_len(n, false), unpadded_len);
        assert_eq!(encoded_len(n, true), padded_len);
    }
}

#[test]
fn empty_input() {
    assert_eq!(to_base32(b""), "");
    assert_eq!(to_base32_spell_safe(b""), "");
}

#[test]
fn single_byte() {
    assert_eq!(to_base32(&[0x66]), "MY======");
    assert_eq!(to_base32_unpadded(&[0x66]), "MY");
    assert_eq!(to_base32_spell_safe(&[0x66]), "Jj======");
}

#[test]
fn two_bytes() {
    assert_eq!(to_base32(&[0x66, 0x6f]), "MZXQ====");
}

#[test]
fn foobar() {
    assert_eq!(
        to_base32(&[0x66, 0x6f, 0x6f, 0x62, 0x61, 0x72]),
        "MZXW6YTBOI======"
    );
}

#[test]
fn alphabets_differ_only_in_symbols() {
    for _ in 0..50 {
        let blob = generate_blob();
        let standard = to_base32(&blob);
        let spell_safe = to_base32_spell_safe(&blob);
        assert_eq!(standard.len(), spell_safe.len());

        // Map every standard symbol to its 5-bit value and back through the other alphabet.
        let translated: String = standard
            .bytes()
            .map(|c| match c {
                b'=' => '=',
                c => {
                    let value = Alphabet::STANDARD.char_to_value(c).unwrap();
                    char::from(Alphabet::SPELL_SAFE.value_to_char(value))
                }
            })
            .collect();
        assert_eq!(translated, spell_safe);
    }
}

#[test]
fn factory_follows_options() {
    let options = Base32Options {
        alphabet: AlphabetKind::SpellSafe,
        padding: true,
    };
    let encode2 = create_to_base32(Some(options));
    let blob = generate_blob();
    assert_eq!(encode2(&blob), encode(&blob, &Alphabet::SPELL_SAFE, true));
}

/// Bit-at-a-time reference encoder for test verification.
fn base32_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

    let total_bits = data.len() * 8;
    let mut out = String::new();
    let mut bit = 0;
    while bit < total_bits {
        let mut value = 0usize;
        for k in 0..5 {
            let pos = bit + k;
            let b = if pos < total_bits {
                (data[pos / 8] >> (7 - pos % 8)) & 1
            } else {
                0
            };
            value = (value << 1) | b as usize;
        }
        out.push(ALPHABET[value] as char);
        bit += 5;
    }
    while out.len() % 8 != 0 {
        out.push('=');
    }
    out
}

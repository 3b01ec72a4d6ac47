//! Property-based round-trip and rejection tests.

use proptest::prelude::*;
use vaultbits_base32::{decode, encode, encoded_len, Alphabet, Base32Error};

fn alphabet() -> impl Strategy<Value = Alphabet> {
    prop_oneof![Just(Alphabet::STANDARD), Just(Alphabet::SPELL_SAFE)]
}

proptest! {
    #[test]
    fn round_trip(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        alphabet in alphabet(),
        padding in any::<bool>(),
    ) {
        let encoded = encode(&bytes, &alphabet, padding);
        prop_assert_eq!(encoded.len(), encoded_len(bytes.len(), padding));
        prop_assert_eq!(decode(&encoded, &alphabet).unwrap(), bytes);
    }

    #[test]
    fn bad_residues_always_fail(
        groups in 0usize..8,
        residue in prop_oneof![Just(1usize), Just(3), Just(6)],
        alphabet in alphabet(),
    ) {
        let len = groups * 8 + residue;
        let text: String = (0..len)
            .map(|i| char::from(alphabet.value_to_char(i as u8)))
            .collect();
        prop_assert_eq!(decode(&text, &alphabet), Err(Base32Error::InvalidLength(len)));
    }
}

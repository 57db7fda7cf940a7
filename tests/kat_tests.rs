#![cfg(feature = "test-vectors")]

// Single-block vectors from FIPS-197 (https://doi.org/10.6028/NIST.FIPS.197-upd1) and
// multi-block ECB-AES128 vectors from
// https://nvlpubs.nist.gov/nistpubs/Legacy/SP/nistspecialpublication800-38a.pdf

use aes128::{Cipher, Error, Key, Result, encrypt, encrypt_block, expand_key};
use hex_literal::hex;

struct BlockVector {
    key: [u8; 16],
    plaintext: [u8; 16],
    ciphertext: [u8; 16],
}

const BLOCK_VECTORS: &[BlockVector] = &[
    // FIPS-197 Appendix B
    BlockVector {
        key: hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        plaintext: hex!("3243f6a8885a308d313198a2e0370734"),
        ciphertext: hex!("3925841d02dc09fbdc118597196a0b32"),
    },
    // FIPS-197 Appendix C.1
    BlockVector {
        key: hex!("000102030405060708090a0b0c0d0e0f"),
        plaintext: hex!("00112233445566778899aabbccddeeff"),
        ciphertext: hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
    },
    // all-zero key and block
    BlockVector {
        key: hex!("00000000000000000000000000000000"),
        plaintext: hex!("00000000000000000000000000000000"),
        ciphertext: hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"),
    },
];

#[test]
fn fips_197_block_vectors() -> Result<()> {
    for v in BLOCK_VECTORS {
        let schedule = expand_key(&v.key)?;
        let actual = encrypt_block(&v.plaintext, schedule.as_bytes())?;
        assert_eq!(actual, v.ciphertext, "encrypt_block mismatch for key {:02x?}", v.key);

        let actual = encrypt(&v.plaintext, &v.key)?;
        assert_eq!(actual, v.ciphertext.to_vec(), "encrypt mismatch for key {:02x?}", v.key);
    }
    Ok(())
}

#[test]
fn fips_197_key_expansion() -> Result<()> {
    // FIPS-197 Appendix A.1, w[40..43]
    let schedule = expand_key(&hex!("2b7e151628aed2a6abf7158809cf4f3c"))?;
    assert_eq!(
        schedule.round_key(10),
        &hex!("d014f9a8 c9ee2589 e13f0cc8 b6630ca6")
    );
    assert_eq!(&schedule.as_bytes()[16..32], &hex!("a0fafe17 88542cb1 23a33939 2a6c7605"));
    Ok(())
}

#[test]
fn sp800_38a_ecb_aes128() -> Result<()> {
    let key = Key::try_from_slice(&hex!("2b7e151628aed2a6abf7158809cf4f3c"))?;
    let plaintext = hex!(
        "6bc1bee22e409f96e93d7e117393172a"
        "ae2d8a571e03ac9c9eb76fac45af8e51"
        "30c81c46a35ce411e5fbc1191a0a52ef"
        "f69f2445df4f9b17ad2b417be66c3710"
    );
    let expected = hex!(
        "3ad77bb40d7a3660a89ecaf32466ef97"
        "f5d3d58503b9699de785895a96fdbaaf"
        "43b1cd7f598ece23881b00e3ed030688"
        "7b0c785e27e8ad3f8223207104725dd4"
    );

    let cipher = Cipher::new(&key);
    assert_eq!(cipher.encrypt(&plaintext), expected.to_vec());
    Ok(())
}

#[test]
fn short_plaintext_is_zero_padded() -> Result<()> {
    // "Hello, World!" padded with three zero bytes
    let key = hex!("000102030405060708090a0b0c0d0e0f");
    let ciphertext = encrypt(b"Hello, World!", &key)?;
    assert_eq!(ciphertext, hex!("862dea45c68585160cda9f5e099ed3ad").to_vec());
    Ok(())
}

#[test]
fn repeated_blocks_repeat_in_ciphertext() -> Result<()> {
    // no chaining: zero plaintext under C.1 key gives the same block three times
    let key = hex!("000102030405060708090a0b0c0d0e0f");
    let ciphertext = encrypt(&[0u8; 40], &key)?;
    let block = hex!("c6a13b37878f5b826f4f8162a1c8d879");

    assert_eq!(ciphertext.len(), 48);
    for chunk in ciphertext.chunks(16) {
        assert_eq!(chunk, block);
    }
    Ok(())
}

#[test]
fn invalid_inputs_are_rejected() -> Result<()> {
    assert!(matches!(expand_key(&[0u8; 15]), Err(Error::InvalidKeyLength { len: 15 })));
    assert!(matches!(encrypt(b"data", &[0u8; 32]), Err(Error::InvalidKeyLength { len: 32 })));

    let schedule = expand_key(&[0u8; 16])?;
    assert!(matches!(
        encrypt_block(&[0u8; 8], schedule.as_bytes()),
        Err(Error::InvalidBlockLength { len: 8 })
    ));
    assert!(matches!(
        encrypt_block(&[0u8; 16], &[0u8; 16]),
        Err(Error::InvalidKeyScheduleLength { len: 16 })
    ));
    Ok(())
}

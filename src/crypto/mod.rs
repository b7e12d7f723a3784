// digests for certificate fingerprints

macro_rules! be_u32 {
    // warning: $e is byte-oriented offset
    ($a:ident[$e:expr]) => ({
        let e = $e;
        let b0 = $a[e] as u32;
        let b1 = $a[e + 1] as u32;
        let b2 = $a[e + 2] as u32;
        let b3 = $a[e + 3] as u32;
        (b0 << (8 * 3)) | (b1 << (8 * 2)) | (b2 << 8) | b3
    })
}

pub mod sha1;
pub mod sha2;

/// Merkle-Damgard padding shared by SHA-1 and SHA-256:
/// `0x80`, zeros, then the bit length as big-endian u64, up to a 64-byte boundary.
fn pad(msg: &[u8]) -> Vec<u8> {
    let len = msg.len();
    let mut msg = msg.to_vec();

    msg.push(0x80);
    let zeros = (64 + 56 - (len + 1) % 64) % 64;
    msg.extend(std::iter::repeat(0).take(zeros));

    // lengths are mod 2^64 bits
    let bitlen = (len as u64).wrapping_mul(8);
    msg.extend_from_slice(&bitlen.to_be_bytes());

    debug_assert_eq!(msg.len() % 64, 0);
    msg
}

// http://csrc.nist.gov/groups/STM/cavp/documents/shs/sha256-384-512.pdf
// not seriously audited.
// no bit-level support. sorry

const INIT_VAL: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

static K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2
];

pub fn sha256(msg: &[u8]) -> [u8; 32] {
    let msg = super::pad(msg);
    let mut val = INIT_VAL;

    for blk in msg.chunks(64) {
        let w = {
            let mut w = [0u32; 64];
            for j in 0..16 {
                w[j] = be_u32!(blk[j * 4]);
            }

            for j in 16..64 {
                let wj15 = w[j - 15];
                let sig0 = wj15.rotate_right(7) ^ wj15.rotate_right(18) ^ (wj15 >> 3);

                let wj2 = w[j - 2];
                let sig1 = wj2.rotate_right(17) ^ wj2.rotate_right(19) ^ (wj2 >> 10);
                w[j] = sig1.wrapping_add(w[j - 7]).wrapping_add(sig0).wrapping_add(w[j - 16]);
            }

            w
        };

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = val;

        for j in 0..64 {
            let ch = (e & f) ^ ((!e) & g);
            let maj = (a & b) ^ (a & c) ^ (b & c);

            let sig0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
            let sig1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);

            let t1 = h.wrapping_add(sig1).wrapping_add(ch).wrapping_add(K[j]).wrapping_add(w[j]);
            let t2 = sig0.wrapping_add(maj);

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (v, x) in val.iter_mut().zip([a, b, c, d, e, f, g, h].iter()) {
            *v = v.wrapping_add(*x);
        }
    }

    let mut ret = [0u8; 32];
    for (out, v) in ret.chunks_mut(4).zip(val.iter()) {
        out.copy_from_slice(&v.to_be_bytes());
    }
    ret
}

#[cfg(test)]
mod test {
    use super::sha256;

    #[test]
    fn test_sha256() {
        static ANSWERS: &[(&[u8], &[u8])] = &[
            (b"",
             b"\xe3\xb0\xc4\x42\x98\xfc\x1c\x14\x9a\xfb\xf4\xc8\x99\x6f\xb9\x24\
               \x27\xae\x41\xe4\x64\x9b\x93\x4c\xa4\x95\x99\x1b\x78\x52\xb8\x55"),
            (b"abc",
             b"\xba\x78\x16\xbf\x8f\x01\xcf\xea\x41\x41\x40\xde\x5d\xae\x22\x23\
               \xb0\x03\x61\xa3\x96\x17\x7a\x9c\xb4\x10\xff\x61\xf2\x00\x15\xad"),
            (b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
             b"\x24\x8d\x6a\x61\xd2\x06\x38\xb8\xe5\xc0\x26\x93\x0c\x3e\x60\x39\
               \xa3\x3c\xe4\x59\x64\xff\x21\x67\xf6\xec\xed\xd4\x19\xdb\x06\xc1"),
        ];

        for &(input, expected) in ANSWERS.iter() {
            let computed = sha256(input);
            assert_eq!(expected, &computed[..]);
        }
    }

    // padding spills into a second block
    #[test]
    fn test_sha256_block_boundary() {
        let computed = sha256(&[b'a'; 56]);
        assert_eq!(&computed[..4], &[0xb3, 0x54, 0x39, 0xa4]);
    }
}

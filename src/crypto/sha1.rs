// FIPS 180-4 6.1. only used for fingerprints.

const INIT_VAL: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

pub fn sha1(msg: &[u8]) -> [u8; 20] {
    let msg = super::pad(msg);
    let mut val = INIT_VAL;

    for blk in msg.chunks(64) {
        let mut w = [0u32; 80];
        for j in 0..16 {
            w[j] = be_u32!(blk[j * 4]);
        }
        for j in 16..80 {
            w[j] = (w[j - 3] ^ w[j - 8] ^ w[j - 14] ^ w[j - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = val;

        for (j, &wj) in w.iter().enumerate() {
            let (f, k) = match j {
                0..=19 => ((b & c) | ((!b) & d), 0x5a827999),
                20..=39 => (b ^ c ^ d, 0x6ed9eba1),
                40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
                _ => (b ^ c ^ d, 0xca62c1d6),
            };

            let t = a.rotate_left(5).wrapping_add(f).wrapping_add(e).wrapping_add(k).wrapping_add(wj);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = t;
        }

        for (v, x) in val.iter_mut().zip([a, b, c, d, e].iter()) {
            *v = v.wrapping_add(*x);
        }
    }

    let mut ret = [0u8; 20];
    for (out, v) in ret.chunks_mut(4).zip(val.iter()) {
        out.copy_from_slice(&v.to_be_bytes());
    }
    ret
}

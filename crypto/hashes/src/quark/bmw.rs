//! Blue Midnight Wish, 512-bit output (BMW-512).

const BLOCK_SIZE: usize = 128;

const IV: [u64; 16] = [
    0x8081828384858687,
    0x88898a8b8c8d8e8f,
    0x9091929394959697,
    0x98999a9b9c9d9e9f,
    0xa0a1a2a3a4a5a6a7,
    0xa8a9aaabacadaeaf,
    0xb0b1b2b3b4b5b6b7,
    0xb8b9babbbcbdbebf,
    0xc0c1c2c3c4c5c6c7,
    0xc8c9cacbcccdcecf,
    0xd0d1d2d3d4d5d6d7,
    0xd8d9dadbdcdddedf,
    0xe0e1e2e3e4e5e6e7,
    0xe8e9eaebecedeeef,
    0xf0f1f2f3f4f5f6f7,
    0xf8f9fafbfcfdfeff,
];

/// Index and sign of each `M ^ H` term summed into `W[j]`.
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, true), (7, false), (10, true), (13, true), (14, true)],
    [(6, true), (8, false), (11, true), (14, true), (15, false)],
    [(0, true), (7, true), (9, true), (12, false), (15, true)],
    [(0, true), (1, false), (8, true), (10, false), (13, true)],
    [(1, true), (2, true), (9, true), (11, false), (14, false)],
    [(3, true), (2, false), (10, true), (12, false), (15, true)],
    [(4, true), (0, false), (3, false), (11, false), (13, true)],
    [(1, true), (4, false), (5, false), (12, false), (14, false)],
    [(2, true), (5, false), (6, false), (13, true), (15, false)],
    [(0, true), (3, false), (6, true), (7, false), (14, true)],
    [(8, true), (1, false), (4, false), (7, false), (15, true)],
    [(8, true), (0, false), (2, false), (5, false), (9, true)],
    [(1, true), (3, true), (6, false), (9, false), (10, true)],
    [(2, true), (4, true), (7, true), (10, true), (11, true)],
    [(3, true), (5, false), (8, true), (11, false), (12, false)],
    [(12, true), (4, false), (6, false), (9, false), (13, true)],
];

const EXPAND2_ROTATIONS: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

#[inline(always)]
fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

#[inline(always)]
fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

#[inline(always)]
fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

#[inline(always)]
fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

#[inline(always)]
fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

#[inline(always)]
fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

fn s_by_index(i: usize, x: u64) -> u64 {
    match i {
        0 => s0(x),
        1 => s1(x),
        2 => s2(x),
        3 => s3(x),
        _ => s4(x),
    }
}

pub fn bmw512(data: &[u8]) -> [u8; 64] {
    let bit_len = (data.len() as u64).wrapping_mul(8);

    let mut padded = data.to_vec();
    padded.push(0x80);
    while padded.len() % BLOCK_SIZE != BLOCK_SIZE - 8 {
        padded.push(0);
    }
    padded.extend_from_slice(&bit_len.to_le_bytes());

    let mut h = IV;
    for block in padded.chunks_exact(BLOCK_SIZE) {
        let mut m = [0u64; 16];
        for (word, bytes) in m.iter_mut().zip(block.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(bytes);
            *word = u64::from_le_bytes(buf);
        }
        h = compress(&h, &m);
    }

    let mut final_h = [0u64; 16];
    for (i, word) in final_h.iter_mut().enumerate() {
        *word = 0xaaaaaaaaaaaaaaa0 + i as u64;
    }
    let h = compress(&final_h, &h);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(h[8..].iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

fn add_element(m: &[u64; 16], h: &[u64; 16], j: usize) -> u64 {
    let k = (j as u64 + 16).wrapping_mul(0x0555555555555555);
    let a = j % 16;
    let b = (j + 3) % 16;
    let c = (j + 10) % 16;
    (m[a].rotate_left(a as u32 + 1))
        .wrapping_add(m[b].rotate_left(b as u32 + 1))
        .wrapping_sub(m[c].rotate_left(c as u32 + 1))
        .wrapping_add(k)
        ^ h[(j + 7) % 16]
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
    let mut q = [0u64; 32];

    for (j, terms) in W_TERMS.iter().enumerate() {
        let w = terms.iter().fold(0u64, |acc, &(idx, positive)| {
            let t = m[idx] ^ h[idx];
            if positive {
                acc.wrapping_add(t)
            } else {
                acc.wrapping_sub(t)
            }
        });
        q[j] = s_by_index(j % 5, w).wrapping_add(h[(j + 1) % 16]);
    }

    for j in 16..18 {
        let mut acc = 0u64;
        for i in 0..16 {
            let f = [1, 2, 3, 0][i % 4];
            acc = acc.wrapping_add(s_by_index(f, q[j - 16 + i]));
        }
        q[j] = acc.wrapping_add(add_element(m, h, j - 16));
    }

    for j in 18..32 {
        let mut acc = 0u64;
        for (n, rot) in EXPAND2_ROTATIONS.iter().enumerate() {
            acc = acc.wrapping_add(q[j - 16 + 2 * n]).wrapping_add(q[j - 15 + 2 * n].rotate_left(*rot));
        }
        acc = acc.wrapping_add(s4(q[j - 2])).wrapping_add(s5(q[j - 1]));
        q[j] = acc.wrapping_add(add_element(m, h, j - 16));
    }

    let xl = q[16..24].iter().fold(0u64, |acc, x| acc ^ x);
    let xh = q[24..32].iter().fold(xl, |acc, x| acc ^ x);

    let mut n = [0u64; 16];
    n[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    n[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    n[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    n[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    n[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    n[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    n[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    n[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);
    n[8] = n[4].rotate_left(9).wrapping_add(xh ^ q[24] ^ m[8]).wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    n[9] = n[5].rotate_left(10).wrapping_add(xh ^ q[25] ^ m[9]).wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    n[10] = n[6].rotate_left(11).wrapping_add(xh ^ q[26] ^ m[10]).wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    n[11] = n[7].rotate_left(12).wrapping_add(xh ^ q[27] ^ m[11]).wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    n[12] = n[0].rotate_left(13).wrapping_add(xh ^ q[28] ^ m[12]).wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    n[13] = n[1].rotate_left(14).wrapping_add(xh ^ q[29] ^ m[13]).wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    n[14] = n[2].rotate_left(15).wrapping_add(xh ^ q[30] ^ m[14]).wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    n[15] = n[3].rotate_left(16).wrapping_add(xh ^ q[31] ^ m[15]).wrapping_add((xl >> 2) ^ q[22] ^ q[15]);
    n
}

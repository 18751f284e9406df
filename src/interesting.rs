// havoc-mutation/src/interesting.rs
//! Precomputed table of interesting integer constants
//!
//! Boundary and edge-case integers (type minima/maxima, power-of-two
//! borders) that experience says are disproportionately likely to trigger
//! bugs when substituted into a test case. Each seed constant is stored as
//! its width-local bit pattern zero-extended to 64 bits, together with its
//! within-width byte-swapped twin, so substitution in the opposite
//! endianness costs nothing at mutation time.

use once_cell::sync::Lazy;

const INTERESTING_8: [i8; 8] = [i8::MIN, -1, 0, 1, 16, 32, 100, i8::MAX];

const INTERESTING_16: [i16; 9] = [-1, i16::MIN, -129, 128, 256, 512, 1000, 1024, 4096];

const INTERESTING_32: [i32; 8] = [
    -1,
    i32::MIN,
    100_663_046,
    -32_769,
    32_768,
    65_536,
    100_663_045,
    i32::MAX,
];

const INTERESTING_64: [i64; 7] = [
    -1,
    i64::MIN,
    -2_147_483_649,
    2_147_483_648,
    4_294_967_295,
    4_294_967_296,
    i64::MAX,
];

static TABLE: Lazy<Vec<u64>> = Lazy::new(build);

// Casting through the unsigned type of the seed's own width keeps the bit
// pattern and zero-extends it; a plain `as u64` on the signed value would
// sign-extend into the high bytes instead.
fn build() -> Vec<u64> {
    let mut table = Vec::with_capacity(2 * (INTERESTING_8.len() + INTERESTING_16.len() + INTERESTING_32.len() + INTERESTING_64.len()));
    for &seed in &INTERESTING_8 {
        table.push(seed as u8 as u64);
        table.push((seed as u8).swap_bytes() as u64);
    }
    for &seed in &INTERESTING_16 {
        table.push(seed as u16 as u64);
        table.push((seed as u16).swap_bytes() as u64);
    }
    for &seed in &INTERESTING_32 {
        table.push(seed as u32 as u64);
        table.push((seed as u32).swap_bytes() as u64);
    }
    for &seed in &INTERESTING_64 {
        table.push(seed as u64);
        table.push((seed as u64).swap_bytes());
    }
    table.sort_unstable();
    table.dedup();
    table
}

/// Returns the full sorted, duplicate-free table.
pub fn values() -> &'static [u64] {
    TABLE.as_slice()
}

/// Returns the table entries representable in `width_bytes` bytes.
///
/// This is a prefix query over the sorted table, not a filter by origin
/// width: an interesting 8-bit constant is just as interesting when written
/// into a 32-bit span.
pub fn for_width(width_bytes: usize) -> &'static [u64] {
    let max = max_int_with_width(width_bytes);
    &TABLE[..TABLE.partition_point(|&value| value <= max)]
}

/// Largest unsigned integer representable in `width_bytes` bytes.
pub fn max_int_with_width(width_bytes: usize) -> u64 {
    if width_bytes >= 8 {
        u64::MAX
    } else {
        (1u64 << (8 * width_bytes)) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        let table = values();
        assert!(!table.is_empty());
        assert!(table.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn table_contains_width_maxima() {
        for expected in [0u64, 0xFF, 0xFFFF, 0xFFFF_FFFF, u64::MAX] {
            assert!(values().contains(&expected), "missing {:#x}", expected);
        }
    }

    #[test]
    fn table_contains_swapped_twins() {
        // -129 as i16 is 0xFF7F; its byte-swap is 0x7FFF.
        assert!(values().contains(&0xFF7F));
        assert!(values().contains(&0x7FFF));
        // 100663045 is 0x06000005; its byte-swap is 0x05000006.
        assert!(values().contains(&0x0600_0005));
        assert!(values().contains(&0x0500_0006));
        // i8::MIN zero-extends to 0x80, not 0xFFFFFF80.
        assert!(values().contains(&0x80));
        assert!(!values().contains(&0xFFFF_FF80));
    }

    #[test]
    fn width_prefixes_fit_their_width() {
        for width in [1usize, 2, 4, 8] {
            let max = max_int_with_width(width);
            assert!(for_width(width).iter().all(|&value| value <= max));
        }
    }

    #[test]
    fn width_prefixes_are_nested() {
        assert!(for_width(1).len() < for_width(2).len());
        assert!(for_width(2).len() < for_width(4).len());
        assert!(for_width(4).len() < for_width(8).len());
        assert_eq!(for_width(8).len(), values().len());
    }

    #[test]
    fn odd_widths_are_supported() {
        assert_eq!(max_int_with_width(3), 0xFF_FFFF);
        assert!(for_width(3).iter().all(|&value| value <= 0xFF_FFFF));
        // The 3-byte prefix still covers everything a 2-byte lookup offers.
        assert!(for_width(3).len() >= for_width(2).len());
    }

    #[test]
    fn max_int_boundaries() {
        assert_eq!(max_int_with_width(1), 0xFF);
        assert_eq!(max_int_with_width(2), 0xFFFF);
        assert_eq!(max_int_with_width(4), 0xFFFF_FFFF);
        assert_eq!(max_int_with_width(8), u64::MAX);
        assert_eq!(max_int_with_width(9), u64::MAX);
    }
}

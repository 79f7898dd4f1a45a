//! The packed pointer/length return convention.
//!
//! Every boundary crossing that hands back a buffer returns a single `i64`:
//! the lower 32 bits carry the pointer, the upper 32 bits carry the length.
//! Both halves are unsigned.

/// Pack `(ptr, len)` into the ABI return type.
#[inline]
pub const fn pack_ptr_len(ptr: u32, len: u32) -> i64 {
    ((len as u64) << 32 | (ptr as u64)) as i64
}

/// Unpack the ABI return type into `(ptr, len)`.
#[inline]
pub const fn unpack_ptr_len(packed: i64) -> (u32, u32) {
    let v = packed as u64;
    let ptr = (v & 0xFFFF_FFFF) as u32;
    let len = (v >> 32) as u32;
    (ptr, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_round_trips() {
        assert_eq!(pack_ptr_len(0, 0), 0);
        assert_eq!(unpack_ptr_len(0), (0, 0));
    }

    #[test]
    fn max_values_survive_without_sign_corruption() {
        assert_eq!(unpack_ptr_len(pack_ptr_len(u32::MAX, 0)), (u32::MAX, 0));
        assert_eq!(unpack_ptr_len(pack_ptr_len(0, u32::MAX)), (0, u32::MAX));
        assert_eq!(
            unpack_ptr_len(pack_ptr_len(u32::MAX, u32::MAX)),
            (u32::MAX, u32::MAX)
        );
    }

    #[test]
    fn round_trip_holds_for_arbitrary_pairs() {
        for &(ptr, len) in &[(1, 2), (0x1000, 65536), (0x7FFF_FFFF, 1), (3, 0)] {
            assert_eq!(unpack_ptr_len(pack_ptr_len(ptr, len)), (ptr, len));
        }
    }

    #[test]
    fn halves_land_in_the_documented_bits() {
        let packed = pack_ptr_len(0xAABB_CCDD, 0x1122_3344);
        assert_eq!(packed as u64 & 0xFFFF_FFFF, 0xAABB_CCDD);
        assert_eq!(packed as u64 >> 32, 0x1122_3344);
    }
}

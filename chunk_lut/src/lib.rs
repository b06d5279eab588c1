//! Precomputed chunk offsets around a viewer, ordered by distance and grouped into shells.
//!
//! The table is generated by `build.rs`. Iterate shells through [`shell_ranges`] or
//! [`shell_offsets`]; shell populations differ, and a shell index is not a distance.

use glam::IVec3;

include!(concat!(env!("OUT_DIR"), "/chunk_lut.gen.rs"));

impl ChunkOffset {
    pub fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl From<ChunkOffset> for IVec3 {
    fn from(value: ChunkOffset) -> Self {
        value.to_ivec3()
    }
}

impl ShellRange {
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub fn shell_ranges() -> &'static [ShellRange] {
    &CHUNK_SHELL_RANGES.0
}

pub fn all_offsets() -> &'static [ChunkOffset] {
    &CHUNK_LUT.0
}

pub fn shell_offsets(shell: usize) -> Option<&'static [ChunkOffset]> {
    let range = shell_ranges().get(shell)?;
    all_offsets().get(range.start as usize..range.end as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(CHUNK_LUT_RADIUS, 16);
        assert_eq!(CHUNK_LUT_LEN, 17077);
        assert_eq!(CHUNK_SHELL_RANGE_COUNT, 17);
        assert_eq!(shell_ranges().last().map(|range| range.end as usize), Some(CHUNK_LUT_LEN));
    }

    #[test]
    fn test_inner_shells() {
        assert_eq!(shell_offsets(0), Some(&[ChunkOffset::new(0, 0, 0)][..]));
        assert_eq!(shell_offsets(1).map(<[ChunkOffset]>::len), Some(6));
        assert_eq!(shell_offsets(2).map(<[ChunkOffset]>::len), Some(26));
        assert_eq!(shell_offsets(CHUNK_SHELL_RANGE_COUNT), None);
    }

    #[test]
    fn test_offsets_are_sorted_by_distance() {
        let dist_sq = |offset: &ChunkOffset| offset.to_ivec3().length_squared();
        assert!(all_offsets().windows(2).all(|pair| dist_sq(&pair[0]) <= dist_sq(&pair[1])));
        assert!(all_offsets().iter().all(|offset| dist_sq(offset) <= CHUNK_LUT_RADIUS * CHUNK_LUT_RADIUS));
    }

    #[test]
    fn test_tables_are_cache_aligned() {
        assert_eq!(std::mem::align_of_val(&CHUNK_LUT), 64);
        assert_eq!(std::ptr::from_ref(&CHUNK_LUT) as usize % 64, 0);
        assert_eq!(std::ptr::from_ref(&CHUNK_SHELL_RANGES) as usize % 64, 0);
    }

    #[test]
    fn test_converts_to_ivec3() {
        let offset = shell_offsets(1).unwrap()[0];
        assert_eq!(IVec3::from(offset), IVec3::new(-1, 0, 0));
    }
}

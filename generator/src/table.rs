use crate::{
    error::LutError,
    limits::MAX_RADIUS,
    offsets::{ChunkOffset, enumerate_ball, sort_by_distance},
    shells::{ShellRange, flatten_shells, partition_shells},
};

/// Validated generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LutParams {
    radius: i32,
    shell_start_radius: i32,
}

impl LutParams {
    pub fn new(radius: i32, shell_start_radius: i32) -> Result<Self, LutError> {
        if radius < 1 {
            return Err(LutError::InvalidRadius(radius));
        }
        if radius > MAX_RADIUS {
            return Err(LutError::RadiusTooLarge {
                radius,
                max: MAX_RADIUS,
            });
        }
        if shell_start_radius < 1 {
            return Err(LutError::InvalidShellStartRadius(shell_start_radius));
        }
        if shell_start_radius > MAX_RADIUS {
            return Err(LutError::ShellStartRadiusTooLarge {
                start: shell_start_radius,
                max: MAX_RADIUS,
            });
        }

        Ok(LutParams {
            radius,
            shell_start_radius,
        })
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn shell_start_radius(&self) -> i32 {
        self.shell_start_radius
    }
}

/// Chunk offsets within a ball, sorted by distance and split into shells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTable {
    params: LutParams,
    offsets: Vec<ChunkOffset>,
    ranges: Vec<ShellRange>,
}

impl GeneratedTable {
    pub fn params(&self) -> LutParams {
        self.params
    }

    pub fn offsets(&self) -> &[ChunkOffset] {
        &self.offsets
    }

    pub fn ranges(&self) -> &[ShellRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn shell_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn shell(&self, index: usize) -> Option<&[ChunkOffset]> {
        self.ranges
            .get(index)
            .map(|range| &self.offsets[range.as_range()])
    }

    pub fn shells(&self) -> impl Iterator<Item = &[ChunkOffset]> {
        self.ranges
            .iter()
            .map(|range| &self.offsets[range.as_range()])
    }
}

#[profiling::function]
pub fn generate(params: LutParams) -> GeneratedTable {
    let mut offsets = enumerate_ball(params.radius);
    log::debug!(
        "Enumerated {} offsets within radius {}",
        offsets.len(),
        params.radius
    );

    sort_by_distance(&mut offsets);

    let shells = partition_shells(&offsets, params.shell_start_radius);
    log::debug!("Partitioned offsets into {} shells", shells.len());

    let (offsets, ranges) = flatten_shells(shells);

    GeneratedTable {
        params,
        offsets,
        ranges,
    }
}

use glam::IVec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A chunk position relative to the viewer's chunk
pub struct ChunkOffset(pub IVec3);

impl ChunkOffset {
    pub const ORIGIN: ChunkOffset = ChunkOffset(IVec3::ZERO);

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        ChunkOffset(IVec3 { x, y, z })
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    pub fn z(&self) -> i32 {
        self.0.z
    }

    /// Squared euclidean distance from the origin, exact.
    pub fn dist_sq(&self) -> i32 {
        self.0.length_squared()
    }

    pub fn is_origin(&self) -> bool {
        self.0 == IVec3::ZERO
    }
}

/// Every lattice point within `radius` of the origin (inclusive), in x, y, z loop order.
pub fn enumerate_ball(radius: i32) -> Vec<ChunkOffset> {
    let radius_sq = radius * radius;
    let mut offsets = Vec::new();

    for x in -radius..=radius {
        for y in -radius..=radius {
            for z in -radius..=radius {
                let offset = ChunkOffset::new(x, y, z);
                if offset.dist_sq() <= radius_sq {
                    offsets.push(offset);
                }
            }
        }
    }

    offsets
}

/// Orders offsets by distance. The sort must stay stable: ties keep enumeration order,
/// which is what makes regenerated tables byte-identical.
pub fn sort_by_distance(offsets: &mut [ChunkOffset]) {
    offsets.sort_by_key(|offset| offset.dist_sq());
}

// Radius of the generated ball, in chunks
pub const DEFAULT_RADIUS: i32 = 32;

// Largest accepted radius, and largest shell start radius. Radius 128 already means ~8.8M
// offsets and a generated source file of a few hundred MB.
pub const MAX_RADIUS: i32 = 128;

// Initial shell threshold after the origin shell, grows by one per band
pub const DEFAULT_SHELL_START_RADIUS: i32 = 1;

// Matches a cache line, the consumer scans shells sequentially
pub const DEFAULT_ALIGNMENT: u32 = 64;
pub const MAX_ALIGNMENT: u32 = 4096;

// Offsets written per line in the generated source
pub const OFFSETS_PER_LINE: usize = 8;

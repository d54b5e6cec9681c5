//! Tunables shared by the volume fill and the extraction driver.

/// Number of X-axis slabs the parallel fill partitions a volume into.
///
/// Each slab is written by exactly one worker, so the fill needs no locking
/// on the sample buffer itself; the count bounds concurrency, not safety.
pub const FILL_SLABS: usize = 8;

/// Default sampling stride for extraction, in lattice units.
pub const DEFAULT_UNIT_SIZE: usize = 16;

/// Smallest permitted sampling stride. Table lookups assume a positive
/// integer step, so strides below this are rejected or clamped.
pub const MIN_UNIT_SIZE: usize = 1;

/// Default iso threshold for a `u8` density field: the midpoint between
/// empty (0) and solid (255).
pub const DEFAULT_ISO_LEVEL: u8 = 128;

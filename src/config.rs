// config.rs: Compile-time configuration constants.
//
// Run-time overrides come from the environment (`LZ4_CLEVEL`,
// `LZ4_LEGACY_EXTENSION`, read in `cli::op_mode`) and from the command line.
// Console detection is provided by std::io::IsTerminal at each call site and
// does not need a constant here.

// Default compression level.
// Can be overridden by the LZ4_CLEVEL environment variable at runtime,
// or by the -# command-line flag.
pub const CLEVEL_DEFAULT: u32 = 1;

// Highest accepted compression level (HC preset ceiling).
pub const CLEVEL_MAX: u32 = 12;

// First level of the high-compression range; -9 is the advertised HC preset.
pub const CLEVEL_HC_MIN: u32 = 3;

// Default block size ID (7 = 4 MB blocks).
// Can be overridden at runtime using the -B# command-line flag.
pub const BLOCKSIZEID_DEFAULT: u32 = 7;

// Smallest and largest preset block size IDs accepted by -B#.
pub const BLOCKSIZEID_MIN: u32 = 4;
pub const BLOCKSIZEID_MAX: u32 = 7;

// Smallest explicit block size in bytes accepted by -B#.
pub const BLOCKSIZE_EXPLICIT_MIN: u32 = 32;

// Default display level: 2 = normal, downgradable.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Default benchmark duration in seconds (-i#).
pub const BENCH_SECONDS_DEFAULT: u32 = 3;

/// Returns the block size in bytes for a preset block size ID.
///
/// IDs 4..=7 map to 64 KB, 256 KB, 1 MB and 4 MB.
pub fn block_size_from_id(id: u32) -> usize {
    1usize << (8 + 2 * id)
}

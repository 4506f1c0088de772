// cli/constants.rs: Program identity strings and display macros.
//
// The display level is not a process-wide global: it lives in
// `ResolvedConfig::verbosity` and in `io::Prefs::display_level`, and every
// diagnostic call passes the level it should be compared against.

// ── String / identity constants ───────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "LZ4 command line interface";
pub const AUTHOR: &str = "Yann Collet";
pub const LZ4_EXTENSION: &str = ".lz4";
pub const LZ4CAT: &str = "lz4cat";
pub const UNLZ4: &str = "unlz4";

pub const KB: usize = 1 << 10;

/// Display levels.
///
/// 0 = no output; 1 = errors only; 2 = normal (downgradable);
/// 3 = non-downgradable normal; 4 = informational.
pub const DISPLAY_SILENT: u32 = 0;
pub const DISPLAY_ERRORS: u32 = 1;
pub const DISPLAY_NORMAL: u32 = 2;
pub const DISPLAY_FORCED: u32 = 3;
pub const DISPLAY_INFO: u32 = 4;

/// Returns the welcome banner printed by `-V` and at verbosity ≥ 3.
pub fn welcome_message() -> String {
    format!(
        "*** {} {}-bits v{}, by {} ***",
        COMPRESSOR_NAME,
        std::mem::size_of::<*const ()>() * 8,
        env!("CARGO_PKG_VERSION"),
        AUTHOR
    )
}

// ── Display macros ────────────────────────────────────────────────────────────

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr when `current` is at or above `level`.
///
/// Usage: `displaylevel!(prefs.display_level, 2, "decoded {} bytes\n", n)`
#[macro_export]
macro_rules! displaylevel {
    ($current:expr, $level:expr, $($arg:tt)*) => {
        if $current >= $level {
            eprint!($($arg)*);
        }
    };
}

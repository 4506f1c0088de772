// cli/help.rs: Usage and help text printers.
//
// Functions:
//   print_usage          → short usage, also shown after a usage error
//   print_usage_advanced → banner + short usage + advanced options (-h)
//   print_long_help      → advanced usage + worked examples (-H)
//   print_bad_usage      → "Incorrect parameters" + short usage

use crate::cli::args::UsageError;
use crate::cli::constants::{welcome_message, LZ4_EXTENSION};
use crate::config::{BLOCKSIZEID_DEFAULT, CLEVEL_MAX};
use crate::displaylevel;
use crate::io::file_io::{NULL_OUTPUT, STDIN_MARK, STDOUT_MARK};

/// Print brief usage to stderr.
pub fn print_usage(program: &str) {
    eprintln!("Usage : ");
    eprintln!("      {} [arg] [input] [output] ", program);
    eprintln!();
    eprintln!("input   : a filename ");
    eprintln!(
        "          with no FILE, or when FILE is - or {}, read standard input",
        STDIN_MARK
    );
    eprintln!("Arguments : ");
    eprintln!(" -1     : Fast compression (default) ");
    eprintln!(" -9     : High compression ");
    eprintln!(
        " -d     : decompression (default for {} extension)",
        LZ4_EXTENSION
    );
    eprintln!(" -z     : force compression ");
    eprintln!(" -f     : overwrite output without prompting ");
    eprintln!("--rm    : remove source file(s) after successful de/compression ");
    eprintln!(" -h/-H  : display help/long help and exit ");
}

/// Print the welcome banner, brief usage and advanced options to stderr.
pub fn print_usage_advanced(program: &str) {
    eprintln!("{}", welcome_message());
    print_usage(program);
    eprintln!();
    eprintln!("Advanced arguments :");
    eprintln!(" -V     : display Version number and exit ");
    eprintln!(" -v     : verbose mode ");
    eprintln!(" -q     : suppress warnings; specify twice to suppress errors too");
    eprintln!(" -c     : force write to standard output, even if it is the console");
    eprintln!(" -t     : test compressed file integrity");
    eprintln!(" -m     : multiple input files (implies automatic output filenames)");
    eprintln!(" -r     : operate recursively on directories (sets also -m) ");
    eprintln!(" -l     : compress using Legacy format (Linux kernel compression)");
    eprintln!(
        " -B#    : Block size [4-7] (default : {}) ",
        BLOCKSIZEID_DEFAULT
    );
    eprintln!(" -BD    : Block dependency (improve compression ratio) ");
    eprintln!("--no-frame-crc : disable stream checksum (default:enabled) ");
    eprintln!("--content-size : compressed frame includes original size (default:not present)");
    eprintln!("--[no-]sparse  : sparse mode (default:enabled on file, disabled on stdout)");
    eprintln!("Benchmark arguments : ");
    eprintln!(" -b#    : benchmark file(s), using # compression level (default : 1) ");
    eprintln!(" -e#    : test all compression levels from -bX to # (default : 1)");
    eprintln!(" -i#    : minimum evaluation time in seconds (default : 3s) ");
    eprintln!(" -B#    : cut file into independent blocks of size # bytes [32+] ");
    eprintln!("                      or predefined block size [4-7] (default: 7) ");
}

/// Print the advanced usage followed by the long explanatory notes.
pub fn print_long_help(program: &str) {
    print_usage_advanced(program);
    eprintln!();
    eprintln!("****************************");
    eprintln!("***** Advanced comment *****");
    eprintln!("****************************");
    eprintln!();
    eprintln!("Which values can [output] have ? ");
    eprintln!("---------------------------------");
    eprintln!("[output] : a filename ");
    eprintln!(
        "          '{}', or '-' for standard output (pipe mode)",
        STDOUT_MARK
    );
    eprintln!("          '{}' to discard output (test mode) ", NULL_OUTPUT);
    eprintln!("[output] can be left empty. In this case, it receives the following value :");
    eprintln!("          - if [input] is standard input, then [output] = stdout ");
    eprintln!("          - otherwise : ");
    eprintln!(
        "               + for compression, output to filename{} ",
        LZ4_EXTENSION
    );
    eprintln!(
        "               + for decompression, output to filename without '{}'",
        LZ4_EXTENSION
    );
    eprintln!(
        "                    > if input filename has no '{}' extension : error ",
        LZ4_EXTENSION
    );
    eprintln!();
    eprintln!("Compression levels : ");
    eprintln!("---------------------");
    eprintln!("-0 ... -2  => Fast compression, all identicals");
    eprintln!(
        "-3 ... -{} => High compression; higher number == more compression but slower",
        CLEVEL_MAX
    );
    eprintln!();
    eprintln!("stdin, stdout and the console : ");
    eprintln!("--------------------------------");
    eprintln!("To protect the console from binary flooding (bad argument mistake)");
    eprintln!("{} will refuse to read from console, or write to console ", program);
    eprintln!("except if '-c' command is specified, to force output to console ");
    eprintln!();
    eprintln!("Simple example :");
    eprintln!("----------------");
    eprintln!("1 : compress 'filename' fast, using default output name 'filename.lz4'");
    eprintln!("          {} filename", program);
    eprintln!();
    eprintln!("Short arguments can be aggregated. For example :");
    eprintln!("----------------------------------");
    eprintln!("2 : compress 'filename' in high compression mode, overwrite output if exists");
    eprintln!("          {} -9 -f filename ", program);
    eprintln!("    is equivalent to :");
    eprintln!("          {} -9f filename ", program);
    eprintln!();
    eprintln!("{} can be used in 'pure pipe mode'. For example :", program);
    eprintln!("-------------------------------------");
    eprintln!("3 : compress data stream from 'generator', send result to 'consumer'");
    eprintln!("          generator | {} | consumer ", program);
}

/// Report a usage error: the reason, "Incorrect parameters" and the short usage.
///
/// Everything is gated on `display_level` ≥ 1 so `-qq` silences it.
pub fn print_bad_usage(program: &str, error: &UsageError, display_level: u32) {
    displaylevel!(display_level, 1, "{}\n", error);
    displaylevel!(display_level, 1, "Incorrect parameters\n");
    if display_level >= 1 {
        print_usage(program);
    }
}

// numera-cli: shared utilities for CLI tools.

use std::process;

use numera_lang::handle::NumeraHandle;

/// Language used when neither `-l` nor `NUMERA_LANG` selects one.
const DEFAULT_LANG: &str = "en";

/// Parse a `--lang=TAG` or `-l TAG` argument from command line args.
///
/// Returns `(lang_tag, remaining_args)`. When no argument selects a
/// language, the `NUMERA_LANG` environment variable is consulted before
/// falling back to the default.
pub fn parse_lang(args: &[String]) -> (String, Vec<String>) {
    let mut lang = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--lang=") {
            lang = Some(val.to_string());
        } else if arg == "--lang" || arg == "-l" {
            if i + 1 < args.len() {
                lang = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    let lang = lang
        .or_else(|| std::env::var("NUMERA_LANG").ok())
        .unwrap_or_else(|| DEFAULT_LANG.to_string());
    (lang, remaining)
}

/// Create a handle for the given language tag, exiting on failure with a
/// list of the built-in tags.
pub fn load_handle(lang: &str) -> NumeraHandle {
    NumeraHandle::for_language(lang).unwrap_or_else(|_| {
        eprintln!(
            "error: unsupported language {:?}; built-in languages are: {}",
            lang,
            NumeraHandle::language_tags().join(", ")
        );
        process::exit(1);
    })
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

// numera-year: Convert years to words.
//
// Reads signed years from arguments or stdin (one per line) and prints the
// spoken form. Negative years always carry the language's BC-equivalent
// token; positive years take the AD-equivalent only with --era.
//
// Usage:
//   numera-year [-l LANG] [--era] [YEAR...]

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lang, args) = numera_cli::parse_lang(&args);

    if numera_cli::wants_help(&args) {
        println!("numera-year: Convert years to words.");
        println!();
        println!("Usage: numera-year [-l LANG] [--era] [YEAR...]");
        println!();
        println!("If YEAR arguments are given, converts each one.");
        println!("Otherwise reads years from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -l, --lang TAG  Language tag (default: en, or NUMERA_LANG)");
        println!("  --era           Mark positive years with the era token");
        println!("  -h, --help      Print this help");
        return;
    }

    let mut include_era = false;
    let mut years: Vec<String> = Vec::new();
    for arg in &args {
        match arg.as_str() {
            "--era" => include_era = true,
            _ => years.push(arg.clone()),
        }
    }

    let mut handle = numera_cli::load_handle(&lang);
    handle.set_include_era(include_era);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let say = |year: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let parsed: Result<i64, _> = year.parse();
        match parsed {
            Ok(y) => match handle.year(y) {
                Ok(text) => {
                    let _ = writeln!(out, "{text}");
                }
                Err(e) => eprintln!("error: {year}: {e}"),
            },
            Err(_) => eprintln!("error: {year}: not a valid year"),
        }
    };

    if years.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let year = line.trim();
            if year.is_empty() {
                continue;
            }
            say(year, &mut out);
        }
    } else {
        for year in &years {
            say(year, &mut out);
        }
    }
}

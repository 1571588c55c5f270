// numera-say: Convert numbers to words.
//
// Reads numbers from arguments or stdin (one per line) and prints the word
// form.
//
// Usage:
//   numera-say [-l LANG] [OPTIONS] [NUMBER...]
//
// Options:
//   -l, --lang TAG      Language tag (default: en, or NUMERA_LANG)
//   --comma             Use the comma word for the decimal separator
//   --negative-prefix W Override the negative prefix word
//   -h, --help          Print help

use std::io::{self, BufRead, Write};

use numera_core::options::DecimalSeparator;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lang, args) = numera_cli::parse_lang(&args);

    if numera_cli::wants_help(&args) {
        println!("numera-say: Convert numbers to words.");
        println!();
        println!("Usage: numera-say [-l LANG] [OPTIONS] [NUMBER...]");
        println!();
        println!("If NUMBER arguments are given, converts each one.");
        println!("Otherwise reads numbers from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -l, --lang TAG       Language tag (default: en, or NUMERA_LANG)");
        println!("  --comma              Use the comma word for the decimal separator");
        println!("  --negative-prefix W  Override the negative prefix word");
        println!("  -h, --help           Print this help");
        return;
    }

    let mut use_comma = false;
    let mut negative_prefix: Option<String> = None;
    let mut numbers: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--comma" => use_comma = true,
            "--negative-prefix" => {
                if i + 1 < args.len() {
                    negative_prefix = Some(args[i + 1].clone());
                    skip_next = true;
                }
            }
            _ => numbers.push(arg.clone()),
        }
    }

    let mut handle = numera_cli::load_handle(&lang);
    if use_comma {
        handle.set_decimal_separator(DecimalSeparator::Comma);
    }
    handle.set_negative_prefix(negative_prefix);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let say = |number: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match handle.cardinal(number) {
            Ok(text) => {
                let _ = writeln!(out, "{text}");
            }
            Err(e) => eprintln!("error: {number}: {e}"),
        }
    };

    if numbers.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let number = line.trim();
            if number.is_empty() {
                continue;
            }
            say(number, &mut out);
        }
    } else {
        for number in &numbers {
            say(number, &mut out);
        }
    }
}

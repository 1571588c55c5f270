// numera-currency: Convert amounts to spoken currency.
//
// Reads decimal amounts from arguments or stdin (one per line) and prints
// the spoken main/sub-unit form using the language's default currency, or a
// caller-supplied unit name pair.
//
// Usage:
//   numera-currency [-l LANG] [OPTIONS] [AMOUNT...]
//
// Options:
//   -l, --lang TAG     Language tag (default: en, or NUMERA_LANG)
//   --unit SG,PL       Main unit names (singular,plural)
//   --sub-unit SG,PL   Sub-unit names (singular,plural)
//   --no-round         Truncate instead of rounding to two sub-unit digits
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

use numera_core::currency::CurrencyInfo;

fn parse_pair(value: &str) -> (String, String) {
    match value.split_once(',') {
        Some((sg, pl)) => (sg.to_string(), pl.to_string()),
        None => (value.to_string(), value.to_string()),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lang, args) = numera_cli::parse_lang(&args);

    if numera_cli::wants_help(&args) {
        println!("numera-currency: Convert amounts to spoken currency.");
        println!();
        println!("Usage: numera-currency [-l LANG] [OPTIONS] [AMOUNT...]");
        println!();
        println!("If AMOUNT arguments are given, converts each one.");
        println!("Otherwise reads amounts from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -l, --lang TAG     Language tag (default: en, or NUMERA_LANG)");
        println!("  --unit SG,PL       Main unit names (singular,plural)");
        println!("  --sub-unit SG,PL   Sub-unit names (singular,plural)");
        println!("  --no-round         Truncate instead of rounding sub-units");
        println!("  -h, --help         Print this help");
        return;
    }

    let mut unit: Option<(String, String)> = None;
    let mut sub_unit: Option<(String, String)> = None;
    let mut no_round = false;
    let mut amounts: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--unit" => {
                if i + 1 < args.len() {
                    unit = Some(parse_pair(&args[i + 1]));
                    skip_next = true;
                }
            }
            "--sub-unit" => {
                if i + 1 < args.len() {
                    sub_unit = Some(parse_pair(&args[i + 1]));
                    skip_next = true;
                }
            }
            "--no-round" => no_round = true,
            _ => amounts.push(arg.clone()),
        }
    }

    let mut handle = numera_cli::load_handle(&lang);
    if no_round {
        handle.set_round_currency(false);
    }
    if let Some((main_sg, main_pl)) = unit {
        let (sub_sg, sub_pl) = sub_unit.unwrap_or_else(|| (main_sg.clone(), main_pl.clone()));
        handle.set_currency_info(CurrencyInfo::new(&main_sg, &main_pl, &sub_sg, &sub_pl));
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let say = |amount: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match handle.currency(amount) {
            Ok(text) => {
                let _ = writeln!(out, "{text}");
            }
            Err(e) => eprintln!("error: {amount}: {e}"),
        }
    };

    if amounts.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let amount = line.trim();
            if amount.is_empty() {
                continue;
            }
            say(amount, &mut out);
        }
    } else {
        for amount in &amounts {
            say(amount, &mut out);
        }
    }
}

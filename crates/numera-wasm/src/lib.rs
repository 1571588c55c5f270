// WASM bindings for Numera number-to-words conversion.
//
// Provides a `WasmNumera` class exported via wasm-bindgen that wraps the
// `NumeraHandle` from numera-lang. Option bags arriving as JavaScript
// objects are deserialized with serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const numera = new WasmNumera("en");
//   numera.cardinal("1234");        // => "one thousand two hundred thirty-four"
//   numera.cardinalNumber(3.14);    // => "three point one four"
//   numera.currency("1.01");        // => "one dollar and one cent"
//   numera.year(-44);               // => "forty-four BC"
//   numera.setOptions({ includeEra: true, commaSeparator: false });
//   WasmNumera.languages();         // => ["en", "en-IN", ...]

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use numera_core::options::DecimalSeparator;
use numera_lang::handle::{LangError, NumeraHandle};

/// Option bag accepted by `setOptions`.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct WasmOptions {
    /// Speak the comma word instead of the point word before fractions.
    comma_separator: bool,
    /// Round currency fractions to two sub-unit digits (default true).
    round_currency: Option<bool>,
    /// Mark positive years with the era token.
    include_era: bool,
    /// Override the negative prefix word.
    negative_prefix: Option<String>,
}

fn lang_error_to_js(e: LangError) -> JsError {
    JsError::new(&e.to_string())
}

/// Number-to-words converter for WebAssembly.
///
/// Wraps one language's configuration; construction fails for unknown
/// language tags.
#[wasm_bindgen]
pub struct WasmNumera {
    handle: NumeraHandle,
}

#[wasm_bindgen]
impl WasmNumera {
    /// Create a converter for a built-in language tag.
    #[wasm_bindgen(constructor)]
    pub fn new(language: &str) -> Result<WasmNumera, JsError> {
        let handle = NumeraHandle::for_language(language).map_err(lang_error_to_js)?;
        Ok(WasmNumera { handle })
    }

    /// Tags of the built-in languages compiled into this build.
    pub fn languages() -> Vec<String> {
        NumeraHandle::language_tags()
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    /// Apply an option bag (a plain JavaScript object).
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: JsValue) -> Result<(), JsError> {
        let options: WasmOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("invalid options: {e}")))?;
        self.handle.set_decimal_separator(if options.comma_separator {
            DecimalSeparator::Comma
        } else {
            DecimalSeparator::Point
        });
        if let Some(round) = options.round_currency {
            self.handle.set_round_currency(round);
        }
        self.handle.set_include_era(options.include_era);
        self.handle.set_negative_prefix(options.negative_prefix);
        Ok(())
    }

    /// Convert a decimal string to words.
    pub fn cardinal(&self, input: &str) -> Result<String, JsError> {
        self.handle.cardinal(input).map_err(lang_error_to_js)
    }

    /// Convert a JavaScript number to words. Non-finite values yield the
    /// language's fixed literal.
    #[wasm_bindgen(js_name = cardinalNumber)]
    pub fn cardinal_number(&self, value: f64) -> Result<String, JsError> {
        self.handle.cardinal_f64(value).map_err(lang_error_to_js)
    }

    /// Convert a decimal string to a spoken currency amount.
    pub fn currency(&self, input: &str) -> Result<String, JsError> {
        self.handle.currency(input).map_err(lang_error_to_js)
    }

    /// Convert a signed year to words.
    pub fn year(&self, year: i32) -> Result<String, JsError> {
        self.handle.year(i64::from(year)).map_err(lang_error_to_js)
    }
}

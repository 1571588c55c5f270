//! Built-in language modules for Numera.
//!
//! Each language module carries the constant vocabulary (a
//! [`numera_engine::lexicon::LexiconTable`]), the numbering system, the
//! agreement rule and a default currency. All of it is configuration built
//! once per handle; the conversion logic lives in `numera-engine`.
//!
//! Language modules are feature-gated so embedders can compile only the
//! tables they ship. The [`handle::NumeraHandle`] type is the top-level
//! integration point.

pub mod handle;

#[cfg(feature = "ar")]
pub mod ar;
#[cfg(feature = "en")]
pub mod en;
#[cfg(feature = "en-in")]
pub mod en_in;
#[cfg(feature = "fr")]
pub mod fr;
#[cfg(feature = "ru")]
pub mod ru;
#[cfg(feature = "si")]
pub mod si;
#[cfg(feature = "zh")]
pub mod zh;

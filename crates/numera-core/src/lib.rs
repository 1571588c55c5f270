//! Shared types for the Numera number-to-words engine.
//!
//! This crate defines the value types that flow between the normalizer, the
//! numeral engine and the language modules:
//!
//! - [`decimal`] -- Arbitrary-precision signed decimal values and parsing
//! - [`context`] -- Grammatical context (gender, role) for one conversion
//! - [`forms`] -- Inflected-form slots and form sets with fallback resolution
//! - [`currency`] -- Caller-supplied currency unit names
//! - [`options`] -- Conversion options
//!
//! Everything here is plain data: construction happens once per call (or once
//! at startup for configuration), and nothing is mutated afterwards.

pub mod context;
pub mod currency;
pub mod decimal;
pub mod forms;
pub mod options;

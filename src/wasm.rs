//! WebAssembly bindings for Headcase.
//!
//! This module provides JavaScript-friendly bindings for the headline case
//! converter.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::Options;
use crate::config::{Config, WordsConfig};

/// JavaScript-friendly options struct.
///
/// All fields are optional and use camelCase naming for JavaScript conventions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsOptions {
    /// Words always capitalized.  Replaces the built-in list.
    pub always_capitalize: Option<Vec<String>>,

    /// Words always lowercased.  Replaces the built-in list.
    pub always_lowercase: Option<Vec<String>>,

    /// Words added to the always-capitalize list.
    pub extra_capitalize: Option<Vec<String>>,

    /// Words added to the always-lowercase list.
    pub extra_lowercase: Option<Vec<String>>,

    /// Minimum length of words that are always capitalized (default: 4).
    pub min_capitalize_length: Option<usize>,
}

impl JsOptions {
    /// Convert JavaScript options to a configuration.
    fn to_config(&self) -> Config {
        let mut config = Config::default();
        let words: &mut WordsConfig = &mut config.words;

        if let Some(ref v) = self.always_capitalize {
            words.always_capitalize = v.clone();
        }
        if let Some(ref v) = self.always_lowercase {
            words.always_lowercase = v.clone();
        }
        if let Some(ref v) = self.extra_capitalize {
            words.extra_capitalize = v.clone();
        }
        if let Some(ref v) = self.extra_lowercase {
            words.extra_lowercase = v.clone();
        }
        if let Some(v) = self.min_capitalize_length {
            config.min_capitalize_length = v;
        }

        config
    }
}

/// How one word was handled.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsWordReport {
    /// The word as it appeared in the input.
    pub word: String,
    /// The rewritten word.
    pub output: String,
    /// The name of the rule that decided the word's case.
    pub rule: String,
}

fn parse_options(options: JsValue) -> Result<Options, JsError> {
    let js_opts: JsOptions = if options.is_undefined() || options.is_null() {
        JsOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
    };

    js_opts
        .to_config()
        .to_options()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Convert a value to headline case with the built-in word lists.
///
/// Any value that is not a string yields an empty string.
#[wasm_bindgen(js_name = toHeadlineCase)]
pub fn to_headline_case(value: JsValue) -> String {
    value
        .as_string()
        .map(|text| crate::transform(&text))
        .unwrap_or_default()
}

/// Convert a value to headline case with custom options.
///
/// # Arguments
///
/// * `value` - Text to convert; any non-string value yields an empty string
/// * `options` - Optional options as a JavaScript object
#[wasm_bindgen(js_name = formatWithOptions)]
pub fn format_with_options(value: JsValue, options: JsValue) -> Result<String, JsError> {
    let opts = parse_options(options)?;
    Ok(value
        .as_string()
        .map(|text| crate::format(&text, &opts))
        .unwrap_or_default())
}

/// Report the rule applied to every word of a value.
#[wasm_bindgen(js_name = explainHeadline)]
pub fn explain_headline(value: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let opts = parse_options(options)?;
    let text = value.as_string().unwrap_or_default();
    let reports: Vec<JsWordReport> = crate::explain(&text, &opts)
        .into_iter()
        .map(|r| JsWordReport {
            word: r.word.to_string(),
            output: r.output,
            rule: r.verdict.rule.name().to_string(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&reports).map_err(|e| JsError::new(&e.to_string()))
}

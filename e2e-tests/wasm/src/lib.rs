#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};

use luhn_algorithms::{is_valid_str, DomainError, Generator};
use rand_chacha::{rand_core::SeedableRng, ChaChaRng};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Error;

    #[wasm_bindgen(constructor)]
    fn new(message: &str) -> Error;
}

fn domain_error(err: DomainError) -> JsValue {
    Error::new(&err.to_string()).into()
}

// 64-bit numbers are passed as decimal strings since they do not fit into JS `number`s.

#[wasm_bindgen(js_name = isValid)]
pub fn is_valid(number: &str) -> Result<bool, JsValue> {
    is_valid_str(number).map_err(|err| Error::new(&err.to_string()).into())
}

#[wasm_bindgen]
pub fn generate(length: u32, seed: u32) -> Result<String, JsValue> {
    let mut generator = Generator::new(ChaChaRng::seed_from_u64(seed.into()));
    let number = generator.generate_random(length).map_err(domain_error)?;
    Ok(number.to_string())
}

#[wasm_bindgen(js_name = generateInRange)]
pub fn generate_in_range(
    lower: &str,
    upper: &str,
    length: u32,
    seed: u32,
) -> Result<String, JsValue> {
    let parse_bound = |bound: &str| {
        bound
            .parse::<luhn_algorithms::Number>()
            .map_err(|err| JsValue::from(Error::new(&err.to_string())))
    };
    let lower = parse_bound(lower)?.get();
    let upper = parse_bound(upper)?.get();

    let mut generator = Generator::new(ChaChaRng::seed_from_u64(seed.into()));
    let number = generator
        .generate_in_range(lower, upper, length)
        .map_err(domain_error)?;
    Ok(number.to_string())
}

//! Reading loosely-typed configuration values.
//!
//! Run with: cargo run --example config_values

use std::error::Error;

use value_as::{
    indirect, to_bool, to_f64, to_sequence, to_string, to_u64_with_options, to_uint, value,
    CoerceOptions, Overflow, Value,
};

fn main() -> Result<(), Box<dyn Error>> {
    // Settings as they might arrive from environment variables or a JSON file
    let json = r#"{
        "debug": "T",
        "workers": " 8 ",
        "timeout": 2.5,
        "retries": -1,
        "hosts": ["alpha", "beta", null]
    }"#;
    let config: Value = serde_json::from_str(json)?;
    let map = config.as_map().ok_or("configuration must be an object")?;

    let debug = to_bool(map.get("debug").unwrap_or(&Value::Nil));
    println!("debug   = {:?} (recognized: {})", debug.value(), debug.is_recognized());

    // The padded literal is only accepted once trimming is switched on
    let workers = map.get("workers").unwrap_or(&Value::Nil);
    println!("workers = {:?}", to_uint(workers).into_parts());
    let trimmed = CoerceOptions::new().with_trimmed_literals(true);
    println!(
        "workers = {:?} (trimmed)",
        value_as::to_uint_with_options(workers, &trimmed).into_parts()
    );

    println!("timeout = {:?}", to_f64(map.get("timeout").unwrap_or(&Value::Nil)).into_parts());

    // Negative counts wrap by default; saturation clamps them to zero
    let retries = map.get("retries").unwrap_or(&Value::Nil);
    let wrap = CoerceOptions::new();
    let saturate = CoerceOptions::new().with_overflow(Overflow::Saturate);
    println!("retries = {:?} (wrap)", to_u64_with_options(retries, &wrap).into_parts());
    println!(
        "retries = {:?} (saturate)",
        to_u64_with_options(retries, &saturate).into_parts()
    );

    let hosts = to_sequence(map.get("hosts").unwrap_or(&Value::Nil))?;
    for host in &hosts {
        match to_string(host).into_option() {
            Some(name) => println!("host    = {}", name),
            None => println!("host    = (unset)"),
        }
    }

    // Shapes that are not sequences report what they are
    if let Err(err) = to_sequence(&value!("alpha")) {
        println!("error   = {}", err);
    }

    // Indirections are followed for booleans only
    let flag = indirect(value!(true));
    println!("flag    = {:?} / {:?}", to_bool(&flag).into_parts(), to_string(&flag).into_parts());

    println!("config  = {}", config);

    Ok(())
}

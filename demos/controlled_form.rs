//! Simulated controlled form driving the phone input state machine.
//!
//! The "form" owns the combined value; the input proposes changes through
//! effects, exactly as a UI binding would wire it up.
//!
//! # Running
//!
//! ```bash
//! cargo run --example controlled_form
//! ```

use intl_phone_input::{Effect, PhoneInput, PhoneInputConfig, Rect};

fn main() {
    let mut value = String::new();
    let config = PhoneInputConfig::builder()
        .placeholder("Enter phone number")
        .required(true)
        .build();
    let mut input = PhoneInput::new(config);
    let anchor = Rect::new(200.0, 40.0, 36.0, 280.0);

    let apply = |value: &mut String, effects: Vec<Effect>| {
        for effect in effects {
            match effect {
                Effect::EmitChange(next) => {
                    println!("  onChange({next:?})");
                    *value = next;
                }
                other => println!("  effect: {other:?}"),
            }
        }
    };

    println!("open selector:");
    apply(&mut value, input.open(&anchor));

    println!("search 'united k':");
    input.set_search("united k");
    for country in input.filtered_countries() {
        println!("  candidate: {country}");
    }

    println!("select GB:");
    let effects = input.select_country(&value, "GB");
    apply(&mut value, effects);

    println!("type local number:");
    let effects = input.edit_local_number(&value, "20 7123 4567");
    apply(&mut value, effects);

    let parts = input.parts(&value);
    println!(
        "rendered state: {} {} | {}",
        parts.country.flag, parts.country.dial_code, parts.local_number
    );

    println!("clear the field:");
    let effects = input.edit_local_number(&value, "");
    apply(&mut value, effects);
    println!("final value: {value:?}");
}

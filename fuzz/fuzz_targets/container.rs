#![no_main]

use libfuzzer_sys::fuzz_target;
use magical_container::{test, test::Action};

fuzz_target!(|data: Vec<Action>| { test::test_with_actions(1, &data) });

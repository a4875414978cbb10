#![no_main]

use libfuzzer_sys::fuzz_target;
use stompboard_spec::{knob_positions, parse_dimensions};

fuzz_target!(|data: &str| {
    if let Ok(dims) = parse_dimensions(data) {
        assert!(dims.is_valid());
        assert_eq!(parse_dimensions(data), Ok(dims));
        let _ = knob_positions(5, dims.width, dims.depth);
    }
});

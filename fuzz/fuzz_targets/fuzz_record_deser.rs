#![no_main]

use libfuzzer_sys::fuzz_target;
use stompboard_spec::{generate_pedal_model, validate_model, validate_pedal_spec, PedalModel, PedalSpec};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(spec) = PedalSpec::from_json(text) {
        let _ = validate_pedal_spec(&spec);
        if let Ok(model) = generate_pedal_model(&spec) {
            let json = model.to_json_pretty().expect("model serializes");
            let reparsed = PedalModel::from_json(&json).expect("model reparses");
            assert_eq!(reparsed.components.len(), model.components.len());
        }
    }

    if let Ok(model) = PedalModel::from_json(text) {
        let _ = validate_model(&model);
    }
});

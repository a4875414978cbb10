//! Stompboard Pedal Spec Library
//!
//! This crate provides the pedal specification record, the procedural 3D
//! model generator, validation, and canonical hashing for Stompboard.
//!
//! # Overview
//!
//! A pedal record is a JSON document describing one physical effects pedal:
//! its identity (`name`, `manufacturer`, `slug`), a free-form `dimensions`
//! string in inches, and its ordered `controls`. From a record the generator
//! derives a compound model description: an enclosure plus knobs, a
//! footswitch, two jacks, and a status LED, each a positioned primitive with
//! a material. A renderer consumes these descriptions by slug.
//!
//! # Example
//!
//! ```
//! use stompboard_spec::{generate_pedal_model, PedalSpec};
//! use stompboard_spec::validation::validate_pedal_spec;
//! use stompboard_spec::hash::canonical_model_hash;
//!
//! let spec = PedalSpec::builder("Boss", "SY-1")
//!     .pedal_type("other")
//!     .dimensions("4.77\" x 2.6\" x 1.39\"")
//!     .controls(["Variation", "Type", "Level"])
//!     .build();
//!
//! assert!(validate_pedal_spec(&spec).is_ok());
//!
//! let model = generate_pedal_model(&spec).unwrap();
//! assert_eq!(model.slug, spec.slug);
//! println!("model hash: {}", canonical_model_hash(&model).unwrap());
//! ```
//!
//! # Modules
//!
//! - [`pedal`]: Pedal record and category types
//! - [`slug`]: Slug derivation and checks
//! - [`dimensions`]: Dimension string parsing and unit conversion
//! - [`color`]: Manufacturer body colors
//! - [`layout`]: Knob placement
//! - [`geometry`]: Vectors, primitive kinds, renderer parameters
//! - [`material`]: Surface materials
//! - [`model`]: Generated model descriptions
//! - [`assemble`]: Record-to-model generation
//! - [`board`]: Pedalboard layout
//! - [`validation`]: Record and model validation
//! - [`hash`]: Canonical hashing
//! - [`error`]: Error and warning types

pub mod assemble;
pub mod board;
pub mod color;
pub mod dimensions;
pub mod error;
pub mod geometry;
pub mod hash;
pub mod layout;
pub mod material;
pub mod model;
pub mod pedal;
pub mod slug;
pub mod validation;

// Re-export commonly used types at the crate root
pub use assemble::generate_pedal_model;
pub use board::{layout_board, BoardSlot, PedalBoard, DEFAULT_BOARD_SPACING};
pub use color::{resolve_body_color, Manufacturer, DEFAULT_BODY_COLOR};
pub use dimensions::{inches_to_mm, parse_dimensions, Dimensions3D, MM_PER_INCH};
pub use error::{
    ErrorCode, ModelError, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use geometry::{geometry_params, GeometryKind, GeometryParams, ModelKind, Vector3D};
pub use hash::{canonical_model_hash, canonical_record_hash};
pub use layout::knob_positions;
pub use material::Material;
pub use model::{Component, PedalModel};
pub use pedal::{PedalSpec, PedalSpecBuilder, PedalType};
pub use slug::{create_slug, is_valid_slug, pedal_filename, pedal_slug};
pub use validation::{validate_model, validate_pedal_spec};

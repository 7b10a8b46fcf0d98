//! Test utilities
//!
//! Sample region data shared by unit and integration tests.

pub mod fixtures;

pub use fixtures::{
    ONTARIO_SAMPLE_CSV, ontario_sample_series, write_config_file, write_region_file,
};

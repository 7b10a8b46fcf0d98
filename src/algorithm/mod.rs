//! Algorithm implementations
//!
//! This module contains the estimation algorithms applied to loaded case data.

pub mod vaccination;

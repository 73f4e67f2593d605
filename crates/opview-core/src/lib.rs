//! opview Core Library
//!
//! This library provides the core functionality for synthesizing
//! renderer-ready operation view-models from parsed API descriptions.
//! The enriched model it produces is consumed by an external template
//! engine; rendering itself is out of scope here.

pub mod config;
pub mod error;
pub mod facts;
pub mod model;
pub mod synth;
pub mod target;
pub mod utils;

pub use crate::{
    config::Config,
    error::{Error, Result},
    facts::{OperationFacts, ParameterFacts},
    model::{ApiModel, Operation, Parameter, Response},
    synth::Synthesizer,
    target::{Dialect, TargetKind},
};

//! Network layer for the assistant service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The assistant service is an externally hosted endpoint performing
//! the actual language-model inference; this layer only packages one
//! message plus rendered history per call and parses the JSON reply.

pub mod assistant;

//! Property-based tests for the slab pipeline.

//! Property-based tests for the solid/dashed segmentation.

//! Edge case tests for convex-eval

//! Edge case tests for convex-lex

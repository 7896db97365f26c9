//! Property-based tests for the normalizer and the credit meter

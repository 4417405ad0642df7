//! Edge case tests for gherk-scan

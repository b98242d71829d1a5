//! Cross-module property and scenario tests.

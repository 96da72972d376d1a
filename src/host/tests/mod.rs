//! Unit tests for the host inspection module.

//! Unit tests for the event text module.

//! Unit tests for the verification lifecycle service

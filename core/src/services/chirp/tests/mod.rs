//! Tests for chirp service

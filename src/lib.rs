//! End-to-end tests for the accsim toolchain live in `tests/`.

//! Workspace-level integration tests for NumSeq live in `tests/`.

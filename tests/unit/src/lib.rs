//! Unit tests for the Trailkit workspace.

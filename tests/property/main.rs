// Property-based tests for the range picker
// Random command sequences must never break the range invariants

mod range_properties;

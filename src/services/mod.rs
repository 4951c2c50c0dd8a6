// Service module exports

pub mod persistence;
pub mod picker;
pub mod settings;

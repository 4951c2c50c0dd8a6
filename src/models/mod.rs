// Module exports for models

pub mod bounds;
pub mod date_value;
pub mod range;
pub mod settings;
pub mod side;

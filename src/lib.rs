// Date Range Picker Library
// Selection core of a start/end/duration date range picker plus a terminal adapter

pub mod error;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;

pub use error::{ConfigError, PickerError};
pub use models::date_value::DateValue;
pub use models::range::{RangeSelection, RangeSnapshot};
pub use models::settings::PickerConfig;
pub use models::side::Side;
pub use services::picker::{PickerView, ViewController};

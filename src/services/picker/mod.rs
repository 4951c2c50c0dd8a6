// Range picker service
// View state machine, highlight computation and change notification

mod controller;
pub mod highlight;
pub mod listeners;
mod view;

pub use controller::{DialogPhase, ViewController};
pub use listeners::{ChangeNotifier, ListenerId, RangeResultListener};
pub use view::PickerView;

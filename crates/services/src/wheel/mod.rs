mod selector;

pub use selector::{SpinRequest, WheelFrame, WheelSelector};

pub mod error;
pub mod moving_average;
pub mod threshold;
pub mod yearly_frame;

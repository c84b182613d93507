mod detector;
mod range;
mod ranges;

pub use detector::{Violations, find_violations};
pub use range::LineRange;
pub use ranges::{changed_ranges_in_new, changed_ranges_in_old};

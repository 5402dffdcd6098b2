//! Pure tracker logic: the habit day-set codec and the sleep window.
//!
//! Nothing in here touches storage; repositories read and write the
//! values these functions transform.

pub mod day_set;
pub mod sleep_window;

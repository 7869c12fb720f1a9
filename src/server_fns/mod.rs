mod waitlist;

pub use waitlist::{join_waitlist, track_conversion, waitlist_count};

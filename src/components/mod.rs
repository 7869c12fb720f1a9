mod confetti;
mod countdown;
mod lead_form;
mod nav;
mod reveal;

pub use confetti::ConfettiBurst;
pub use countdown::Countdown;
pub use lead_form::WaitlistForm;
pub use nav::Nav;
pub use reveal::RevealOnScroll;

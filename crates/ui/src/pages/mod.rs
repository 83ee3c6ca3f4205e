//! Route targets. Only [`Projects`] and [`Contact`] hold state.

mod about;
mod contact;
mod home;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use home::{Fallback, Home};
pub use projects::{ProjectList, Projects};
pub use skills::Skills;

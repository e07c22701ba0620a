pub mod registrations;
pub mod sessions;

pub mod registrations;

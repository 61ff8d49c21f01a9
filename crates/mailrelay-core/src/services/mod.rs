/// Service layer
pub mod ses;

pub use ses::{EmailSender, SesEmailSender};

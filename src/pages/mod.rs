//! Page components for the portfolio.

mod contact;
mod home;
mod resume;

pub use contact::ContactPage;
pub use home::HomePage;
pub use resume::ResumePage;

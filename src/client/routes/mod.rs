pub mod employer_dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod worker_dashboard;

pub use employer_dashboard::EmployerDashboard;
pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use signup::Signup;
pub use worker_dashboard::WorkerDashboard;

pub mod routes;
pub mod chat;
pub mod landing;
pub mod problem;

pub use chat::ChatPage;
pub use landing::LandingPage;
pub use problem::ProblemPage;

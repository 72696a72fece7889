pub mod about;
pub mod home;
pub mod tools;

pub use about::AboutPage;
pub use home::HomePage;
pub use tools::ToolsPage;

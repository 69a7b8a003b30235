pub mod formation;
pub mod home;
pub mod login;
pub mod my_officers;
pub mod my_skills;
pub mod not_found;

pub use formation::Formation;
pub use home::Home;
pub use login::Login;
pub use my_officers::MyOfficers;
pub use my_skills::MySkills;
pub use not_found::NotFound;

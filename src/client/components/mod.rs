pub mod identity_layout;
pub mod navbar;
pub mod notice;
pub mod page;

pub use identity_layout::IdentityLayout;
pub use navbar::Navbar;
pub use notice::{Notice, NoticeBanner};
pub use page::Page;

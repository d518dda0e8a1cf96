pub mod job_card;
pub mod navbar;
pub mod notice;
pub mod page;
pub mod title;

pub use job_card::JobCard;
pub use navbar::Navbar;
pub use notice::{Notice, NoticeBanner};
pub use page::Page;
pub use title::KhademniTitleButton;

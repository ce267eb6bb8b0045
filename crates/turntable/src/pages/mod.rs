//! One component per route.

mod embed;
mod job;
mod landing;
mod not_found;
mod upload;
mod view;

pub use embed::Embed;
pub use job::JobProgress;
pub use landing::Landing;
pub use not_found::PageNotFound;
pub use upload::Upload;
pub use view::Viewer;

mod load;
mod meta;
mod pane;

pub use load::decode_gray_from_path;
pub use meta::ImageMeta;
pub use pane::ResultPane;

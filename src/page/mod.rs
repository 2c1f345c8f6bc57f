mod fetch;
mod html_title;
mod poll;
mod video_id;
mod watch_tracker;

pub use self::fetch::*;
pub use self::html_title::*;
pub use self::poll::*;
pub use self::video_id::*;
pub use self::watch_tracker::*;

/// Supplies the title of the currently shown video, `None` while there is none.
pub trait PageTitleSource {
    fn get_page_title(&self) -> Option<String>;
}

/// A title known up front, e.g. given on the command line.
pub struct StaticTitle(pub Option<String>);

impl PageTitleSource for StaticTitle {
    fn get_page_title(&self) -> Option<String> {
        crate::utils::get_trimmed_string(self.0.as_deref())
    }
}

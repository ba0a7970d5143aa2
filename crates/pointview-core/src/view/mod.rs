mod event;
mod state;

pub use event::{hover_events, ViewerEvent};
pub use state::{ThumbnailView, ViewState};

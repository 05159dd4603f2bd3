pub mod preview;

pub use preview::{PreviewRequest, PreviewService, PreviewStyle, MAX_PREVIEW_PIXELS};

use thiserror::Error;

/// Failures surfaced while wiring or driving the page behaviors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("dom call failed: {0}")]
    Dom(String),

    #[error("tab control has no usable index: {value:?}")]
    BadTabIndex { value: String },

    #[error("tab index {index} is out of range for {slide_count} slide(s)")]
    TabOutOfRange { index: usize, slide_count: usize },
}

impl Error {
    /// Folds an opaque JS exception into something displayable.
    pub fn dom(value: wasm_bindgen::JsValue) -> Self {
        Error::Dom(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// Application layer - Use case interactors

pub mod container;
pub mod screenshot_interactor;
pub mod size_guard;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use screenshot_interactor::{Progress, ScreenshotInteractor};
pub use size_guard::{ImageCompressor, SizeGuard};

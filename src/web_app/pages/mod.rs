// web_app/pages/mod.rs - Page components module
//
// - HomePage: hero, search box, trending list and movie grid

pub mod home;

// Re-export page components
pub use home::HomePage;

pub mod settings;

pub use settings::ViewSettings;

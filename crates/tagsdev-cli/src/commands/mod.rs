mod build;
mod run;
pub(crate) mod up;

pub use build::build;
pub use run::run;
pub use up::up;

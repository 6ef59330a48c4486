pub mod completion;
pub mod hover;

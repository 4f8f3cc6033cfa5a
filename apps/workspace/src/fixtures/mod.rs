pub mod calls;
pub mod directory;
pub mod documents;
pub mod mail;

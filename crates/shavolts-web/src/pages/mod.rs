pub mod accessories;
pub mod home;
pub mod shabook;
pub mod shapad;
pub mod shaphone;
pub mod shawatch;
pub mod store;
pub mod support;

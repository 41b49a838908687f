mod server;
mod submit;

pub use server::{app, serve};
pub use submit::{SubmitArgs, submit};

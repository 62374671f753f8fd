pub mod helpers;

mod refresh;
mod request;
mod resources;
mod session;

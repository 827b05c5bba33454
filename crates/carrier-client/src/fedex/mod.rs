mod client;
mod request;


pub use client::*;

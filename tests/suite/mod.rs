mod render;
mod session;

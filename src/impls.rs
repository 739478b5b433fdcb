mod integers;
mod wrappers;

mod contents;
mod helpers;
mod root;

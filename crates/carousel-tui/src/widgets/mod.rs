pub mod console;
pub mod dots;

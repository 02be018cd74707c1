mod enums;
mod from_row;
mod structs;
#[cfg(test)]
mod tests;

pub use enums::*;
pub use structs::*;

mod io;
mod ring;

pub use ring::Ring;

pub use io::Args;
pub use clap::Parser;

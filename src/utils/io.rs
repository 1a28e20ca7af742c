use clap::Parser;

#[derive(Parser)]
#[command(about = "Minimum railway hops between two cities, counting airports")]
pub struct Args {
    /// Path to a problem file; standard input is read when omitted
    #[arg(short, long)]
    pub file: Option<String>,
}

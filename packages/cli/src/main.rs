use clap::Parser;

use textbus_cli::Args;

fn main() {
    let args = Args::parse();

    textbus_cli::logger::init(args.verbose);

    match textbus_cli::run(&args) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

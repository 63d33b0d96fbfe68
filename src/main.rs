mod cli;
mod errors;
mod input;
mod output;
mod tree;

use clap::Parser;
use cli::Args;
use errors::AppError;
use output::Stats;
use tree::build_tree;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let records = input::read_records(&args.input, args.null)?;
    let root = build_tree(&records, args.delimiter);

    let mut lines = Vec::new();
    root.render_with_indent(-1, args.indent_unit(), &mut lines);

    for line in &lines {
        println!("{}", line);
    }

    if args.stats {
        let stats = Stats::collect(&root);
        println!();
        println!("{}", stats.render());
    }

    Ok(())
}

//! # ontoconv
//!
//! OntoNotes CoNLL conversion tool.
//!
//! ```sh
//! ontoconv 0.1.0
//! OntoNotes CoNLL conversion tool.
//!
//! USAGE:
//!     ontoconv <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     collect    Merge raw gold_conll files into per-split text files
//!     convert    Convert merged split files into CoNLL-U, NER and SRL files
//!     help       Prints this message or the help of the given subcommand(s)
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use ontoconv::error;
use ontoconv::processing;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Ontoconv::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Ontoconv::Collect(c) => {
            processing::collect::collect(&c.src, &c.dst, c.language, &c.domains)?;
        }
        cli::Ontoconv::Convert(c) => {
            processing::convert::convert(&c.src, &c.dst, c.language)?;
        }
    };
    Ok(())
}

//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use ontoconv::lang::Lang;

#[derive(Debug, StructOpt)]
#[structopt(name = "ontoconv", about = "OntoNotes CoNLL conversion tool.")]
/// Holds every command that is callable by the `ontoconv` command.
pub enum Ontoconv {
    #[structopt(about = "Merge raw gold_conll files into per-split text files")]
    Collect(Collect),
    #[structopt(about = "Convert merged split files into CoNLL-U, NER and SRL files")]
    Convert(Convert),
}

#[derive(Debug, StructOpt)]
/// Collect command and parameters.
pub struct Collect {
    #[structopt(parse(from_os_str), help = "conll-2012 release location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of merged split files")]
    pub dst: PathBuf,
    #[structopt(
        short = "l",
        long = "language",
        default_value = "chinese",
        help = "language to collect (english, chinese, arabic)"
    )]
    pub language: Lang,
    #[structopt(
        short = "d",
        long = "domain",
        help = "genre domains to keep (bc bn mz nw tc wb). All if unspecified."
    )]
    pub domains: Vec<String>,
}

#[derive(Debug, StructOpt)]
/// Convert command and parameters.
pub struct Convert {
    #[structopt(parse(from_os_str), help = "merged split files location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of derived format files")]
    pub dst: PathBuf,
    #[structopt(
        short = "l",
        long = "language",
        default_value = "chinese",
        help = "language to convert (english, chinese, arabic)"
    )]
    pub language: Lang,
}

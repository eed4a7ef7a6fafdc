//! Semantic-role emitter: word + predicate indicator + BIO argument columns.
//!
//! Column count varies with the number of predicates annotated in the
//! sentence: two fixed columns, plus one decoded column per
//! predicate-argument column, possibly zero.
use crate::conll::{bio, SentenceRecord};
use crate::error::Error;

/// Frameset placeholder marking a non-predicate token.
const NO_FRAMESET: &str = "-";

/// Emit one SRL block with `2 + record.predicate_arguments.len()` columns.
pub fn emit(record: &SentenceRecord) -> Result<String, Error> {
    let predicate: Vec<String> = record
        .predicate_frameset
        .iter()
        .map(|f| if f == NO_FRAMESET { "_" } else { "Y" }.to_string())
        .collect();

    let decoded: Vec<Vec<String>> = record
        .predicate_arguments
        .iter()
        .map(|column| bio::decode(column))
        .collect::<Result<_, _>>()?;

    let mut columns: Vec<&[String]> = vec![&record.word, &predicate];
    columns.extend(decoded.iter().map(|c| c.as_slice()));
    Ok(super::block(record, &columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::testutil::record;

    fn column_counts(out: &str) -> Vec<usize> {
        out.lines()
            .skip(1)
            .take_while(|l| !l.is_empty())
            .map(|l| l.split('\t').count())
            .collect()
    }

    #[test]
    fn no_predicates_gives_two_columns() {
        let r = record(&["It", "rains"], &["*", "*"], &["-", "-"], &[]);
        let out = emit(&r).unwrap();
        assert_eq!(column_counts(&out), [2, 2]);
    }

    #[test]
    fn two_predicates_give_four_columns() {
        let r = record(
            &["He", "ran", "and", "fell"],
            &["*"; 4],
            &["-", "01", "-", "01"],
            &[
                &["(ARG0)", "(V*)", "*", "*"],
                &["(ARG0)", "*", "*", "(V*)"],
            ],
        );
        let out = emit(&r).unwrap();
        assert_eq!(column_counts(&out), [4, 4, 4, 4]);
    }

    #[test]
    fn predicate_indicator() {
        let r = record(
            &["He", "ran"],
            &["*", "*"],
            &["-", "02"],
            &[&["(ARG0)", "(V*)"]],
        );
        let out = emit(&r).unwrap();
        let indicators: Vec<&str> = out
            .lines()
            .skip(1)
            .take(2)
            .map(|l| l.split('\t').nth(1).unwrap())
            .collect();
        assert_eq!(indicators, ["_", "Y"]);
    }

    #[test]
    fn argument_columns_are_decoded() {
        let r = record(
            &["He", "ran", "home"],
            &["*"; 3],
            &["-", "01", "-"],
            &[&["(ARG0)", "(V*)", "(ARG4*)"]],
        );
        let out = emit(&r).unwrap();
        let third: Vec<&str> = out
            .lines()
            .skip(1)
            .take(3)
            .map(|l| l.split('\t').nth(2).unwrap())
            .collect();
        assert_eq!(third, ["B-ARG0", "B-V", "B-ARG4"]);
    }

    #[test]
    fn columns_keep_original_order() {
        let r = record(
            &["a", "b"],
            &["*", "*"],
            &["01", "02"],
            &[&["(V*)", "*"], &["*", "(V*)"]],
        );
        let out = emit(&r).unwrap();
        let first_row: Vec<&str> = out.lines().nth(1).unwrap().split('\t').collect();
        assert_eq!(first_row, ["a", "Y", "B-V", "O"]);
    }
}

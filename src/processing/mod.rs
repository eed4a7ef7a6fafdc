/*! Batch processing stages.

- [collect]: merges raw `*gold_conll` files into one text file per split.
- [convert]: turns merged split files into CoNLL-U, NER and SRL files.
!*/
pub mod collect;
pub mod convert;

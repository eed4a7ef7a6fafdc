/*!
# ontoconv

Conversion pipeline deriving per-task training files from OntoNotes-style
CoNLL corpora.

One multi-annotation source file per corpus split is decoded sentence by
sentence and projected into three independent formats: a CoNLL-U shaped
dependency skeleton (placeholder heads, no real parse), a BIO-tagged
named-entity file and a BIO-tagged semantic-role file.

Usable both as a command line tool and as a library: the [conll] module
exposes the block/record/BIO decoding layer, [formats] the per-task
projections, [processing] the batch stages.
!*/
pub mod conll;
pub mod error;
pub mod formats;
pub mod io;
pub mod lang;
pub mod processing;

pub mod braille;
pub mod frame;

pub use braille::{BraillePlot, encode_rows, preprocess_to_braille};
pub use frame::{label_width, render_histogram};

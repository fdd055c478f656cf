//! Rendering errors against the text they came from.

mod printer;


pub use printer::ErrorPrinter;

use crate::Error;

impl Error {
    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}

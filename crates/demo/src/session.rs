//! Interactive session
//!
//! Reads two bags line by line, exercises each one, then prints a report that
//! compares them.

use std::{
    io::{self, BufRead, Write},
    num::ParseIntError,
};

use arraybag::prelude::*;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that end a demo session early.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Reading from input or writing to output failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A bag size line was not a non-negative integer.
    #[error("invalid bag size {input:?}: {source}")]
    InvalidSize {
        /// The line as entered
        input: String,

        /// Why it failed to parse
        source: ParseIntError,
    },

    /// A bag operation rejected its arguments.
    #[error(transparent)]
    Bag(#[from] BagError),

    /// Input ended before every prompt was answered.
    #[error("input ended before the session finished")]
    UnexpectedEof,
}

/// One run of the demo over an input and an output stream.
#[derive(Debug)]
pub struct Session<R, W, G> {
    input: R,
    output: W,
    rng: G,
    probe1: String,
    probe2: String,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    /// Create a session. `probe1` and `probe2` are the items counted in bag 1
    /// and bag 2 for the final report.
    pub fn new(input: R, output: W, rng: G, probe1: String, probe2: String) -> Self {
        Session {
            input,
            output,
            rng,
            probe1,
            probe2,
        }
    }

    /// Run the whole session and hand back the output stream.
    ///
    /// # Errors
    ///
    /// Returns a `DemoError` if the input ends early, a size is invalid, or
    /// the streams fail.
    pub fn run(mut self) -> Result<W, DemoError> {
        let mut bag1 = self.read_bag(1, true)?;
        self.inspect(1, &mut bag1)?;

        let mut bag2 = self.read_bag(2, false)?;
        self.inspect(2, &mut bag2)?;

        self.report(&mut bag1, &bag2)?;
        self.output.flush()?;

        Ok(self.output)
    }

    fn read_bag(&mut self, number: usize, echo: bool) -> Result<ArrayBag<String>, DemoError> {
        self.prompt(&format!("Size of bag {number}: "))?;

        let line = self.read_line()?;
        let size = line
            .trim()
            .parse::<usize>()
            .map_err(|source| DemoError::InvalidSize {
                input: line.clone(),
                source,
            })?;

        let mut bag = ArrayBag::with_capacity(size)?;

        for i in 0..size {
            self.prompt(&format!("item {i}: "))?;

            let item = self.read_line()?;
            if !bag.add(item) {
                debug!(number, "item rejected by full bag");
            }

            if echo {
                writeln!(self.output, "bag {number} = {bag}")?;
            }
        }

        writeln!(self.output, "bag {number} = {bag}")?;
        writeln!(self.output)?;

        info!(number, size, "read bag");

        Ok(bag)
    }

    fn inspect(&mut self, number: usize, bag: &mut ArrayBag<String>) -> Result<(), DemoError> {
        let grabbed = bag.grab_with(&mut self.rng)?;
        writeln!(self.output, "grabbed {grabbed}")?;
        writeln!(self.output)?;

        for item in bag.iter() {
            writeln!(self.output, "{item}")?;
        }
        writeln!(self.output)?;

        self.prompt("item to remove: ")?;

        let item = self.read_line()?;
        if bag.contains(&item) {
            bag.remove(&item);
        }

        writeln!(self.output, "bag {number} = {bag}")?;
        writeln!(self.output)?;

        Ok(())
    }

    fn report(
        &mut self,
        bag1: &mut ArrayBag<String>,
        bag2: &ArrayBag<String>,
    ) -> Result<(), DemoError> {
        writeln!(self.output, "{}", bag1.capacity())?;
        writeln!(self.output, "{}", bag2.capacity())?;
        writeln!(self.output, "{}", bag1.is_empty())?;
        writeln!(self.output, "{}", bag2.is_empty())?;
        writeln!(self.output, "{}", bag1.num_occur(&self.probe1))?;
        writeln!(self.output, "{}", bag2.num_occur(&self.probe2))?;
        writeln!(self.output, "{}", bag1.add_items(bag2))?;
        writeln!(self.output, "{}", bag1.equals(bag2))?;
        writeln!(self.output, "{}", bag1.union_with(bag2)?)?;

        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), DemoError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        Ok(())
    }

    fn read_line(&mut self) -> Result<String, DemoError> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(DemoError::UnexpectedEof);
        }

        let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(len);

        Ok(line)
    }
}

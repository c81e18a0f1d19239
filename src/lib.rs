//! A resistor combination finder for circuit design.
//!
//! When provided with a target resistance and a pool of available resistor values, it builds
//! every series/parallel network of up to a given number of resistors, ranks them by how close
//! they come to the target, and draws each one as an ASCII schematic.
//!
//! # Example
//! Finding the closest network of at most two resistors to 150Ω, when only 100Ω and 220Ω
//! resistors are at hand:
//! ```rust
//! extern crate resistor_finder;
//!
//! use resistor_finder::*;
//!
//! fn main() {
//!     let mut ranking = CombinationSearch::new(&[100.0, 220.0], 2)
//!         .rank(150.0)
//!         .expect("Error: parallel combination of a zero resistance");
//!
//!     ranking.truncate(1);
//!     write_ranking(&ranking, &mut std::io::stdout()).unwrap();
//! }
//! ```
//! Running this example produces:
//! ```text
//! 110Ω (-40Ω/-26.667%): (220||220)Ω
//!
//! ─┬─[220Ω]─┬─
//!  └─[220Ω]─┘
//!```

extern crate itertools;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

use itertools::Itertools;

mod error;
mod report;
mod resistance;
mod schematic;
mod search;
mod units;
mod value;

pub use error::{Error, Result};
pub use report::{write_ranking, write_result};
pub use resistance::{
    parallel_value, series_value, Combined, Kind, KindRules, Layout, Leaf, Resistance,
};
pub use schematic::{BranchGlyphs, Edge, PARALLEL_GLYPHS};
pub use search::{CombinationSearch, Ranking, ResistanceSet};
pub use units::{parse_resistance, parse_resistance_list, parse_target};
pub use value::{absolute_deviation, deviation, format_ohms, format_value, round_value, ValueKey};

const POWERS: &[f64] = &[1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7];

lazy_static! {
    /// RSeries constant for the E3 standard series
    pub static ref E3: RSeries = RSeries::new(&[1.0, 2.2, 4.7]);
    /// RSeries constant for the E6 standard series
    pub static ref E6: RSeries = RSeries::extend(&E3, &[1.5, 3.3, 6.8]);
    /// RSeries constant for the E12 standard series
    pub static ref E12: RSeries = RSeries::extend(&E6, &[1.2, 1.8, 2.7, 3.9, 5.6, 8.2]);
    /// RSeries constant for the E24 standard series
    pub static ref E24: RSeries = RSeries::extend(
        &E12,
        &[1.1, 1.3, 1.6, 2.0, 2.4, 3.0, 3.6, 4.3, 5.1, 6.2, 7.5, 9.1]
    );
}

/// A series of resistor values over the eight decades from 1Ω, constants are provided for
/// standard resistor array values.
#[derive(Debug)]
pub struct RSeries {
    values: Box<[f64]>,
}

impl RSeries {
    /// Defines a new series of resistor values. Only the decade needs to be provided, multiples
    /// upto Val * 10M will be generated automatically.
    /// # Example
    /// ```
    ///     # use resistor_finder::*;
    ///     let series = RSeries::new(&[1.0, 2.2, 4.7]);
    ///     assert_eq!(series.len(), 24);
    ///     assert!(series.values().contains(&22.0));
    /// ```
    pub fn new(series: &[f64]) -> Self {
        RSeries {
            values: Self::decades(series).collect::<Vec<f64>>().into_boxed_slice(),
        }
    }

    fn extend(base: &RSeries, add: &[f64]) -> Self {
        RSeries {
            values: base
                .iter()
                .cloned()
                .chain(Self::decades(add))
                .sorted_by(|a, b| a.total_cmp(b))
                .collect::<Vec<f64>>()
                .into_boxed_slice(),
        }
    }

    fn decades(series: &[f64]) -> impl Iterator<Item = f64> + '_ {
        series
            .iter()
            .cartesian_product(POWERS.iter())
            .map(|(val, pow)| round_value(val * pow))
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

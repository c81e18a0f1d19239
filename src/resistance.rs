use itertools::Itertools;

use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::schematic::{BranchGlyphs, PARALLEL_GLYPHS};
use crate::value::{absolute_deviation, deviation, format_ohms, format_value, round_value};

/// The operator joining the children of a combined resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Series,
    Parallel,
}

/// How the children of a kind are arranged in a schematic.
#[derive(Debug, Clone, Copy)]
pub enum Layout {
    /// Children side by side on the same wire.
    Chain,
    /// Children stacked between two branch connectors.
    Stack(&'static BranchGlyphs),
}

/// Everything that distinguishes one combination kind from another.
pub struct KindRules {
    pub name: &'static str,
    /// Joins child expressions, e.g. `(220+100)`.
    pub separator: &'static str,
    pub aggregate: fn(&[f64]) -> Result<f64>,
    pub layout: Layout,
}

static SERIES_RULES: KindRules = KindRules {
    name: "series",
    separator: "+",
    aggregate: series_value,
    layout: Layout::Chain,
};

static PARALLEL_RULES: KindRules = KindRules {
    name: "parallel",
    separator: "||",
    aggregate: parallel_value,
    layout: Layout::Stack(&PARALLEL_GLYPHS),
};

impl Kind {
    pub fn rules(self) -> &'static KindRules {
        match self {
            Kind::Series => &SERIES_RULES,
            Kind::Parallel => &PARALLEL_RULES,
        }
    }
}

/// Total resistance of values wired in series.
pub fn series_value(values: &[f64]) -> Result<f64> {
    Ok(values.iter().sum())
}

/// Total resistance of values wired in parallel.
///
/// Computed as `P / Σ(P / v)` with `P` the product of all values, which needs one division per
/// value instead of two.
pub fn parallel_value(values: &[f64]) -> Result<f64> {
    if values.iter().any(|v| *v == 0.0) {
        return Err(Error::ZeroInParallel);
    }
    let product: f64 = values.iter().product();
    Ok(product / values.iter().map(|v| product / v).sum::<f64>())
}

/// A resistance realised by a single component.
#[derive(Debug, Clone)]
pub struct Leaf {
    value: f64,
}

/// A resistance realised by two or more resistances joined by one operator.
///
/// Never holds a direct child of its own kind, and keeps its children sorted by descending
/// value.
#[derive(Debug, Clone)]
pub struct Combined {
    kind: Kind,
    children: Vec<Rc<Resistance>>,
    value: f64,
    component_count: usize,
}

impl Combined {
    fn new(kind: Kind, operands: &[Rc<Resistance>]) -> Result<Self> {
        if operands.len() < 2 {
            return Err(Error::TooFewOperands(operands.len()));
        }
        let (same, mut children): (Vec<_>, Vec<_>) = operands
            .iter()
            .cloned()
            .partition(|r| r.kind() == Some(kind));
        for r in &same {
            children.extend(r.children().iter().cloned());
        }
        // Stable, so equal values keep their operand order.
        children.sort_by(|a, b| b.value().total_cmp(&a.value()));

        let values = children.iter().map(|r| r.value()).collect::<Vec<f64>>();
        let value = round_value((kind.rules().aggregate)(&values)?);
        let component_count = children.iter().map(|r| r.component_count()).sum();
        Ok(Combined {
            kind,
            children,
            value,
            component_count,
        })
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn children(&self) -> &[Rc<Resistance>] {
        &self.children
    }
}

/// A resistance built from one or more components.
#[derive(Debug, Clone)]
pub enum Resistance {
    Leaf(Leaf),
    Combined(Combined),
}

impl Resistance {
    /// A single component of the given raw value.
    pub fn leaf(value: f64) -> Self {
        Resistance::Leaf(Leaf {
            value: round_value(value),
        })
    }

    /// Combines `operands` under `kind`, flattening operands that already are of that kind.
    ///
    /// # Examples
    /// ```
    ///     # use std::rc::Rc;
    ///     # use resistor_finder::{Kind, Resistance};
    ///     let inner = Rc::new(Resistance::series(&[
    ///         Rc::new(Resistance::leaf(100.0)),
    ///         Rc::new(Resistance::leaf(220.0)),
    ///     ]).unwrap());
    ///     let outer = Resistance::combine(Kind::Series, &[inner, Rc::new(Resistance::leaf(330.0))])
    ///         .unwrap();
    ///     assert_eq!(outer.expression(), "(330+220+100)");
    ///     assert_eq!(outer.component_count(), 3);
    /// ```
    pub fn combine(kind: Kind, operands: &[Rc<Resistance>]) -> Result<Self> {
        Combined::new(kind, operands).map(Resistance::Combined)
    }

    pub fn series(operands: &[Rc<Resistance>]) -> Result<Self> {
        Self::combine(Kind::Series, operands)
    }

    pub fn parallel(operands: &[Rc<Resistance>]) -> Result<Self> {
        Self::combine(Kind::Parallel, operands)
    }

    /// The rounded value in ohms.
    pub fn value(&self) -> f64 {
        match self {
            Resistance::Leaf(l) => l.value,
            Resistance::Combined(c) => c.value,
        }
    }

    /// Number of physical components contained.
    pub fn component_count(&self) -> usize {
        match self {
            Resistance::Leaf(_) => 1,
            Resistance::Combined(c) => c.component_count,
        }
    }

    /// The combination kind, `None` for a leaf.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Resistance::Leaf(_) => None,
            Resistance::Combined(c) => Some(c.kind),
        }
    }

    /// Immediate children, empty for a leaf.
    pub fn children(&self) -> &[Rc<Resistance>] {
        match self {
            Resistance::Leaf(_) => &[],
            Resistance::Combined(c) => &c.children,
        }
    }

    /// The value without unit, e.g. `68.75`.
    pub fn value_string(&self) -> String {
        format_value(self.value())
    }

    /// The value with unit, e.g. `68.75Ω`.
    pub fn value_with_unit(&self) -> String {
        format_ohms(self.value())
    }

    /// The bracketed combination expression, e.g. `(220||100)`, or the plain value for a leaf.
    pub fn expression(&self) -> String {
        match self {
            Resistance::Leaf(_) => self.value_string(),
            Resistance::Combined(c) => format!(
                "({})",
                c.children
                    .iter()
                    .map(|r| r.expression())
                    .join(c.kind.rules().separator)
            ),
        }
    }

    pub fn deviation_from(&self, target: f64) -> f64 {
        deviation(self.value(), target)
    }

    pub fn absolute_deviation_from(&self, target: f64) -> f64 {
        absolute_deviation(self.value(), target)
    }
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}Ω", self.expression())
    }
}

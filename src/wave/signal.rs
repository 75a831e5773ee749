//! Signal builder: one named row of a timing diagram.
//!
//! A signal is an append-only list of steps. A named step carries both its data
//! symbol and its label, so the `wave` string and the `data` array are always
//! derived from the same ordered sequence and cannot drift apart.

use crate::Result;
use crate::json::{Object, Value};
use crate::wave::{DataColor, Symbol};

/// Initial step capacity; `Vec` grows amortized from there.
const INITIAL_STEPS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Plain(Symbol),
    Named { color: DataColor, label: String },
}

impl Step {
    pub fn symbol(&self) -> Symbol {
        match self {
            Step::Plain(s) => *s,
            Step::Named { color, .. } => Symbol::Data(*color),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Step::Plain(_) => None,
            Step::Named { label, .. } => Some(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    name: String,
    steps: Vec<Step>,
}

impl Signal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::with_capacity(INITIAL_STEPS),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append one symbol. A data symbol appended this way has no label.
    pub fn node(&mut self, symbol: Symbol) -> &mut Self {
        self.steps.push(Step::Plain(symbol));
        self
    }

    /// Append a data symbol together with its label.
    pub fn named(&mut self, color: DataColor, label: impl Into<String>) -> &mut Self {
        self.steps.push(Step::Named {
            color,
            label: label.into(),
        });
        self
    }

    /// Hold the previous value for one more step.
    pub fn hold(&mut self) -> &mut Self {
        self.node(Symbol::Continue)
    }

    pub fn hold_for(&mut self, steps: usize) -> &mut Self {
        self.steps
            .extend(std::iter::repeat_n(Step::Plain(Symbol::Continue), steps));
        self
    }

    /// Append every character of a wave string as a plain step.
    ///
    /// The whole string is checked first; on error the signal is unchanged.
    pub fn push_wave(&mut self, wave: &str) -> Result<&mut Self> {
        let symbols = wave
            .chars()
            .map(Symbol::try_from)
            .collect::<Result<Vec<_>>>()?;
        self.steps.extend(symbols.into_iter().map(Step::Plain));
        Ok(self)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn wave(&self) -> String {
        self.steps.iter().map(|s| s.symbol().as_char()).collect()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(Step::label)
    }

    /// Project to `{"name": .., "wave": .., "data": [..]}`. Every string is copied.
    pub fn to_json(&self) -> Value {
        let data: Vec<Value> = self.labels().map(Value::from).collect();

        let mut obj = Object::new();
        obj.push("name", self.name.as_str())
            .push("wave", self.wave())
            .push("data", data);
        Value::Object(obj)
    }
}

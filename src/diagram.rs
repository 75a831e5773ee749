//! Root of a WaveDrom document: `{"signal": [...]}`.

use crate::json::{Object, Value};
use crate::wave::Signal;

#[derive(Debug, Clone, Default)]
pub struct Diagram {
    signals: Vec<Signal>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, signal: Signal) -> &mut Self {
        self.signals.push(signal);
        self
    }

    /// Signals in insertion order.
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn to_json(&self) -> Value {
        let rows: Vec<Value> = self.signals.iter().map(Signal::to_json).collect();

        let mut root = Object::new();
        root.push("signal", rows);
        Value::Object(root)
    }
}

impl FromIterator<Signal> for Diagram {
    fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
        Self {
            signals: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{self, Style};
    use crate::wave::Symbol;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_diagram() {
        let text = json::to_string(&Diagram::new().to_json(), Style::Compact).unwrap();
        assert_eq!(text, r#"{"signal":[]}"#);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut d = Diagram::new();
        for name in ["c", "a", "b"] {
            let mut s = Signal::new(name);
            s.node(Symbol::Low);
            d.push(s);
        }

        let names: Vec<&str> = d.signals().iter().map(Signal::name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);

        let text = json::to_string(&d.to_json(), Style::Compact).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"signal":[{"name":"c","wave":"0","data":[]},"#,
                r#"{"name":"a","wave":"0","data":[]},"#,
                r#"{"name":"b","wave":"0","data":[]}]}"#
            )
        );
    }

    #[test]
    fn duplicate_signal_names_are_kept() {
        let d: Diagram = [Signal::new("same"), Signal::new("same")].into_iter().collect();
        let json = d.to_json();
        assert_eq!(json.get("signal").and_then(Value::as_array).map(|a| a.len()), Some(2));
    }
}

//! Built-in example diagrams printed by the CLI.

use crate::diagram::Diagram;
use crate::wave::{DataColor, Signal, Symbol};

/// A level followed by three holds, for each level in turn.
fn stepped(name: &str, levels: &[Symbol]) -> Signal {
    let mut sig = Signal::new(name);
    for &level in levels {
        sig.node(level).hold_for(3);
    }
    sig
}

/// Two plain signals without data labels.
pub fn plain() -> Diagram {
    let mut d = Diagram::new();
    d.push(stepped(
        "Sig 1",
        &[
            Symbol::High,
            Symbol::Data(DataColor::White),
            Symbol::Data(DataColor::Yellow),
        ],
    ))
    .push(stepped(
        "Sig 2",
        &[
            Symbol::Data(DataColor::White),
            Symbol::High,
            Symbol::Unknown,
        ],
    ));
    d
}

/// One bus signal carrying labeled data.
pub fn labeled() -> Diagram {
    let mut sig = Signal::new("Data");
    sig.named(DataColor::Red, "Data 1")
        .hold()
        .hold()
        .hold()
        .node(Symbol::HighZ)
        .hold()
        .named(DataColor::Yellow, "data 2");

    let mut d = Diagram::new();
    d.push(sig);
    d
}

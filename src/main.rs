use clap::{Parser, ValueEnum};
use wavedrom_signals::{Result, demos, diagnostics, json};

#[derive(Parser)]
#[command(name = "wavedrom-signals")]
#[command(about = "Build WaveDrom signal diagrams and print them as JSON", long_about = None)]
struct Cli {
    /// Which built-in diagram to print.
    #[arg(long, value_enum, default_value_t = Demo::Plain)]
    demo: Demo,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Demo {
    /// Two signals stepping through levels, no data labels.
    Plain,
    /// One bus signal with labeled data steps.
    Labeled,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Build.
    let diagram = match cli.demo {
        Demo::Plain => demos::plain(),
        Demo::Labeled => demos::labeled(),
    };

    if diagram.signals().is_empty() {
        diagnostics::warn("diagram has no signals");
    }
    for sig in diagram.signals().iter().filter(|s| s.is_empty()) {
        diagnostics::warn(format!("signal '{}' has an empty wave", sig.name()));
    }

    // 2) Project, then measure and serialize against the same tree.
    let root = diagram.to_json();
    let style = if cli.pretty {
        json::Style::Pretty
    } else {
        json::Style::Compact
    };
    let text = json::to_string(&root, style)?;

    println!("{}", text);
    Ok(())
}

//! shapevisit CLI
//!
//! Runs the built-in operations over a list of shapes and prints one line
//! per effect, grouped by operation.
//!
//! ```text
//! shapevisit                                  # circle:5 rectangle:10x20, draw + area
//! shapevisit -o perimeter circle:1 rect:2x3
//! shapevisit --json -p 4 circle:2.5
//! ```

use anyhow::Context;
use clap::Parser;
use shapevisit::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shapevisit", version, about = "Run shape operations via double dispatch")]
struct Cli {
    /// Shapes to visit, as `circle:R` or `rectangle:WxH`.
    #[arg(value_name = "SHAPE", default_values = ["circle:5", "rectangle:10x20"])]
    shapes: Vec<Shape>,

    /// Operations to run, in order (draw, area, perimeter).
    #[arg(short = 'o', long = "op", value_name = "OPERATION", default_values = ["draw", "area"])]
    operations: Vec<Operation>,

    /// Decimal places shown for circle results.
    #[arg(
        short,
        long,
        env = "SHAPEVISIT_PRECISION",
        default_value_t = shapevisit::operations::DEFAULT_PRECISION
    )]
    precision: usize,

    /// Print one JSON object per effect instead of text.
    #[arg(long)]
    json: bool,

    /// Finish with a count of shapes per kind.
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    for (i, op) in cli.operations.iter().enumerate() {
        let effects = op
            .run(&cli.shapes, cli.precision)
            .with_context(|| format!("running operation '{op}'"))?;

        if cli.json {
            for effect in &effects {
                println!("{}", effect_json(*op, effect)?);
            }
            continue;
        }

        if i > 0 {
            println!();
        }
        println!("{}", op.header());
        for effect in &effects {
            println!("{effect}");
        }
    }

    if cli.summary {
        let mut tally = KindTally::new();
        visit_all(&cli.shapes, &mut tally);
        if !cli.json {
            println!();
        }
        for kind in ShapeKind::ALL {
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "summary": kind.name(), "count": tally.count(kind) })
                );
            } else {
                println!("{kind}: {}", tally.count(kind));
            }
        }
    }

    Ok(())
}

/// One JSON line: the serialized effect plus the operation that produced it.
fn effect_json(op: Operation, effect: &Effect) -> serde_json::Result<serde_json::Value> {
    let mut value = serde_json::to_value(effect)?;
    if let Some(object) = value.as_object_mut() {
        object.insert("operation".into(), op.name().into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_demo() {
        let cli = Cli::try_parse_from(["shapevisit"]).unwrap();
        assert_eq!(cli.shapes.len(), 2);
        assert_eq!(cli.shapes[0].kind(), ShapeKind::Circle);
        assert_eq!(cli.operations, vec![Operation::Draw, Operation::Area]);
        assert!(!cli.json);
    }

    #[test]
    fn parses_shapes_and_operations() {
        let cli = Cli::try_parse_from([
            "shapevisit",
            "-o",
            "perimeter",
            "--op",
            "draw",
            "rect:2x3",
            "circle:1",
        ])
        .unwrap();
        assert_eq!(cli.operations, vec![Operation::Perimeter, Operation::Draw]);
        assert_eq!(cli.shapes[0], Shape::rectangle(2.0, 3.0).unwrap());
        assert_eq!(cli.shapes[1], Shape::circle(1.0).unwrap());
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["shapevisit", "hexagon:3"]).is_err());
    }

    #[test]
    fn json_lines_name_the_operation() {
        let shapes = [Shape::circle(5.0).unwrap()];
        let effects = Operation::Perimeter.run(&shapes, 3).unwrap();
        let value = effect_json(Operation::Perimeter, &effects[0]).unwrap();
        assert_eq!(value["operation"], "perimeter");
        assert_eq!(value["effect"], "measured");
        assert_eq!(value["kind"], "circle");
        assert_eq!(value["quantity"], "perimeter");
        assert_eq!(value["precision"], 3);

        let effects = Operation::Draw.run(&shapes, 3).unwrap();
        let value = effect_json(Operation::Draw, &effects[0]).unwrap();
        assert_eq!(value["operation"], "draw");
        assert_eq!(value["text"], "Drawing circle with radius 5");
    }
}

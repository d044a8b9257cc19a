use anyhow::{bail, Context, Result};
use std::fmt::Write as FmtWrite;
use std::io::Write;

use crate::{Atom, Bond, Molecule};

impl Molecule {
    /// Generates a DOT representation of the molecule: one labelled node per
    /// atom and one edge per bond (two or three for double and triple bonds).
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_dot(&mut dot);
        dot
    }

    fn write_dot(&self, dot: &mut String) -> std::fmt::Result {
        writeln!(dot, "graph Molecule {{")?;
        writeln!(dot, "    layout=neato; rankdir=LR;")?;
        writeln!(dot, "    multiedge=true;")?;

        for atom in self.atoms() {
            writeln!(
                dot,
                "    {} [label=\"{}\", fontcolor=white, shape=circle, style=\"{}\", fillcolor={}];",
                atom.index(),
                dot_label(atom),
                if atom.is_aromatic() { "filled,dashed" } else { "filled" },
                element_to_color(atom.element()),
            )?;
        }

        for (a, b, bond) in self.bonds() {
            let (style, extra) = bond_to_style(&bond);
            let count = match bond {
                Bond::Double => 2,
                Bond::Triple => 3,
                _ => 1,
            };
            for _ in 0..count {
                writeln!(dot, "    {a} -- {b} [style={style}, penwidth=2.0{extra}];")?;
            }
        }

        writeln!(dot, "}}")
    }
}

/// Writes the molecule's DOT graph to `output_dot` and, when `output_image`
/// is given, renders it to PNG with Graphviz' `dot` command.
pub fn visualize_molecule(
    molecule: &Molecule,
    output_dot: &str,
    output_image: Option<&str>,
) -> Result<()> {
    let mut file = std::fs::File::create(output_dot)
        .with_context(|| format!("Failed to create DOT file {output_dot}"))?;
    file.write_all(molecule.to_dot().as_bytes())
        .with_context(|| format!("Failed to write DOT file {output_dot}"))?;
    tracing::info!("DOT file saved to {output_dot}");

    if let Some(image_path) = output_image {
        let status = std::process::Command::new("dot")
            .args(["-Tpng", output_dot, "-o", image_path])
            .status()
            .context("Failed to execute Graphviz 'dot' command")?;
        if !status.success() {
            bail!("Graphviz 'dot' command failed with status: {status}");
        }
        tracing::info!("Image rendered to {image_path}");
    }
    Ok(())
}

/// Node label: the atom as written, with quotes escaped for DOT.
fn dot_label(atom: &Atom) -> String {
    atom.to_string().replace('\\', "\\\\").replace('"', "\\\"")
}

fn element_to_color(element: &str) -> &'static str {
    match element {
        "C" => "black",
        "H" => "gray",
        "O" => "red",
        "N" => "blue",
        "F" => "pink",
        "Cl" => "darkgreen",
        "Br" => "brown",
        "I" => "purple",
        "S" => "goldenrod",
        "P" => "orange",
        "*" => "white",
        _ => "gray40",
    }
}

/// Graphviz edge style and extra attributes for a bond.
fn bond_to_style(bond: &Bond) -> (&'static str, &'static str) {
    match bond {
        Bond::Aromatic => ("dashed", ", color=purple"),
        Bond::Up => ("solid", ", label=\"/\""),
        Bond::Down => ("solid", ", label=\"\\\\\""),
        _ => ("solid", ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_smiles_default;

    #[test]
    fn test_element_to_color() {
        assert_eq!(element_to_color("C"), "black");
        assert_eq!(element_to_color("O"), "red");
        assert_eq!(element_to_color("Fe"), "gray40");
    }

    #[test]
    fn draw_ethanol() {
        let molecule = parse_smiles_default("CCO").unwrap();
        let dot = molecule.to_dot();
        assert!(dot.starts_with("graph Molecule {"));
        assert!(dot.contains("2 [label=\"O\""));
        assert!(dot.contains("0 -- 1 [style=solid"));
        assert!(dot.contains("1 -- 2 [style=solid"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn draw_methyl_ethanoate() {
        let molecule = parse_smiles_default("COC(C)=O").unwrap();
        let dot = molecule.to_dot();
        assert_eq!(dot.matches("2 -- 4").count(), 2);
        assert_eq!(dot.matches(" -- ").count(), 5);
    }

    #[test]
    fn draw_bracket_and_aromatic_atoms() {
        let molecule = parse_smiles_default("c1ccccc1[NH3+]").unwrap();
        let dot = molecule.to_dot();
        assert!(dot.contains("label=\"[NH3+]\""));
        assert!(dot.contains("filled,dashed"));
    }
}

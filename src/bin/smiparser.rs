use anyhow::{anyhow, bail, Context, Result};
use smiparser::*;

const USAGE: &str = "Usage: smiparser [--strict] [--policy <bits>] [--allow <relaxation>]... \
[--log <level>] [--dot <file>] [--png <file>] <SMILES>...";

#[derive(Debug, Default)]
struct Options {
    strict: bool,
    policy: RulePolicy,
    log: Option<String>,
    dot: Option<String>,
    png: Option<String>,
    inputs: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| anyhow!("{flag} expects a value"));
        match arg.as_str() {
            "--strict" => options.strict = true,
            "--policy" => {
                let bits = value("--policy")?;
                let bits: u8 = bits
                    .parse()
                    .with_context(|| format!("Invalid policy bits '{bits}'"))?;
                options.policy |= RulePolicy::from(bits);
            }
            "--allow" => {
                let name = value("--allow")?;
                options.policy |= RulePolicy::from_kebab_name(&name)
                    .ok_or_else(|| anyhow!("Unknown relaxation '{name}'"))?;
            }
            "--log" => options.log = Some(value("--log")?),
            "--dot" => options.dot = Some(value("--dot")?),
            "--png" => options.png = Some(value("--png")?),
            "-h" | "--help" => bail!("{USAGE}"),
            flag if flag.starts_with("--") => bail!("Unknown option '{flag}'\n{USAGE}"),
            input => options.inputs.push(input.to_string()),
        }
    }
    if options.inputs.is_empty() {
        bail!("{USAGE}");
    }
    Ok(options)
}

fn report(smiles: &str, molecule: &Molecule) {
    println!(
        "{smiles}: {} atoms, {} bonds, {} fragments",
        molecule.atom_count(),
        molecule.bond_count(),
        molecule.fragment_count()
    );
    for atom in molecule.atoms() {
        println!("  atom {:>3} {}", atom.index(), atom);
    }
    for (a, b, bond) in molecule.bonds() {
        println!("  bond {a:>3} -{}- {b}", bond.symbol());
    }
}

fn report_error(smiles: &str, err: &SmilesError) {
    eprintln!("{smiles}: {err}");
    eprintln!("  {smiles}");
    eprintln!("  {}^", " ".repeat(err.position()));
}

fn main() -> Result<()> {
    let options = parse_args(std::env::args().skip(1))?;
    init_logging(options.log.as_deref().unwrap_or("warn"));

    let mut failures = 0;
    for (i, smiles) in options.inputs.iter().enumerate() {
        match parse_smiles(smiles, options.strict, options.policy) {
            Ok(molecule) => {
                report(smiles, &molecule);
                // Only the first input is drawn.
                if let Some(dot) = options.dot.as_deref().filter(|_| i == 0) {
                    visualize_molecule(&molecule, dot, options.png.as_deref())
                        .with_context(|| format!("While drawing {smiles}"))?;
                }
            }
            Err(err) => {
                report_error(smiles, &err);
                failures += 1;
            }
        }
    }
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

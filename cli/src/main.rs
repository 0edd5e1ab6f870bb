#![allow(clippy::print_stderr, clippy::print_stdout)]

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use grdfs_dict::Dictionary;
use grdfs_kernel::HostKernelRuntime;
use grdfs_model::{KeyId, Triple as GTriple, TripleFlags};
use grdfs_reason::{compute_closure, ReasonerIndex, RuleSet as EngineRuleSet};
use oxrdf::{Subject, Term};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Device {
    Cpu,
    Gpu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RuleArg {
    Rhodf,
    Rdfs,
}

impl From<RuleArg> for EngineRuleSet {
    fn from(value: RuleArg) -> Self {
        match value {
            RuleArg::Rhodf => Self::RhoDf,
            RuleArg::Rdfs => Self::Rdfs,
        }
    }
}

/// Computes the RDFS (or ρDF) closure of a Turtle input file.
#[derive(Debug, Parser)]
#[command(name = "grdfs", about = "RDFS closure engine")]
struct Args {
    /// Turtle file to load and materialize.
    #[arg(long)]
    input_file: PathBuf,

    /// Join kernel backend. `gpu` currently falls back to the host backend.
    #[arg(long, value_enum, default_value = "cpu")]
    device: Device,

    /// Entailment rule set to apply.
    #[arg(long, value_enum, default_value = "rhodf")]
    rules: RuleArg,

    /// Seed the closure with the fixed RDFS axiomatic triples (full RDFS only).
    #[arg(long)]
    axioms: bool,

    /// Disable the triple store's local fingerprint dedup optimization hint.
    #[arg(long)]
    no_local_dedup: bool,

    /// Disable the join kernel's global pair-index dedup optimization hint.
    #[arg(long)]
    no_global_dedup: bool,

    /// Report wall-clock timing for each pipeline stage on stderr.
    #[arg(long)]
    time: bool,

    /// Print the final triple set to stdout in N-Triples form.
    #[arg(long)]
    print_triples: bool,

    /// Back the dictionary with a named file instead of an anonymous one.
    #[arg(long)]
    dict_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.device == Device::Gpu {
        eprintln!("grdfs: no GPU kernel backend is wired up, falling back to the host backend");
    }
    if args.no_local_dedup || args.no_global_dedup {
        eprintln!(
            "grdfs: dedup is always on (TripleStore::add's fingerprint check cannot be \
             disabled without breaking its contract); the flag is accepted for CLI parity only"
        );
    }

    let mut dict = match &args.dict_file {
        Some(path) => Dictionary::open(path)
            .with_context(|| format!("opening dictionary file {}", path.display()))?,
        None => Dictionary::new().context("creating anonymous dictionary")?,
    };
    let mut index = ReasonerIndex::new(&mut dict).context("registering schema vocabulary")?;

    let file = File::open(&args.input_file)
        .with_context(|| format!("opening input file {}", args.input_file.display()))?;

    let mut timer = Timer::new(args.time);

    timer.start();
    let parser = oxttl::TurtleParser::new().for_reader(BufReader::new(file));
    let mut parsed = 0usize;
    let mut skipped = 0usize;
    for result in parser {
        match result {
            Ok(triple) => {
                let t = lower_triple(&mut dict, &triple)
                    .context("resolving parsed triple against the dictionary")?;
                index.add(&dict, t, TripleFlags::empty())?;
                parsed += 1;
            }
            Err(e) => {
                eprintln!("grdfs: skipping unparseable line: {e}");
                skipped += 1;
            }
        }
    }
    timer.stop("parsing + loading");
    if skipped > 0 {
        eprintln!(
            "grdfs: skipped {skipped} unparseable triple(s) out of {}",
            parsed + skipped
        );
    }

    let rule_set: EngineRuleSet = args.rules.into();

    if args.axioms {
        if rule_set != EngineRuleSet::Rdfs {
            bail!("--axioms requires --rules rdfs");
        }
        timer.start();
        index.add_axiomatic_triples(&mut dict)?;
        timer.stop("axiomatic triples");
    }

    let runtime = HostKernelRuntime::default();
    timer.start();
    compute_closure(&mut index, &mut dict, &runtime, rule_set)?;
    timer.stop("closure computation");

    eprintln!(
        "grdfs: {} triples total ({} inferred, {} inferred duplicates)",
        index.size(),
        index.inferred_triples(),
        index.inferred_duplicates(),
    );

    if args.print_triples {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for t in index.iter_all() {
            if t.predicate.is_blank() {
                continue;
            }
            write_ntriples_term(&mut out, &dict, t.subject)?;
            write!(out, " ")?;
            write_ntriples_term(&mut out, &dict, t.predicate)?;
            write!(out, " ")?;
            write_ntriples_term(&mut out, &dict, t.object)?;
            writeln!(out, " .")?;
        }
    }

    timer.report();

    Ok(())
}

/// Resolves a parsed Turtle triple's terms into dictionary ids, tagging
/// blank nodes and literals on first sight.
fn lower_triple(dict: &mut Dictionary, triple: &oxrdf::Triple) -> Result<GTriple> {
    let subject = match &triple.subject {
        Subject::NamedNode(n) => dict.lookup(n.as_str())?,
        Subject::BlankNode(b) => {
            dict.lookup_with(&format!("_:{}", b.as_str()), KeyId::set_blank)?
        }
    };
    let predicate = dict.lookup(triple.predicate.as_str())?;
    let object = match &triple.object {
        Term::NamedNode(n) => dict.lookup(n.as_str())?,
        Term::BlankNode(b) => {
            dict.lookup_with(&format!("_:{}", b.as_str()), KeyId::set_blank)?
        }
        Term::Literal(l) => dict.lookup_with(&l.to_string(), KeyId::set_literal)?,
    };
    Ok(GTriple::new(subject, predicate, object))
}

/// Writes a single dictionary-resolved term in N-Triples form: `<iri>` for
/// IRIs, the stored text as-is for literals (already quoted by `oxrdf`'s
/// `Literal::Display`) and blank nodes (already `_:label`).
fn write_ntriples_term(out: &mut impl Write, dict: &Dictionary, key: KeyId) -> Result<()> {
    let text = dict.find(key)?;
    if key.is_iri() {
        write!(out, "<{text}>")?;
    } else {
        write!(out, "{text}")?;
    }
    Ok(())
}

/// Wall-clock stage timer, active only behind `--time`.
struct Timer {
    enabled: bool,
    started: Option<Instant>,
    stages: Vec<(&'static str, std::time::Duration)>,
}

impl Timer {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            started: None,
            stages: Vec::new(),
        }
    }

    fn start(&mut self) {
        if self.enabled {
            self.started = Some(Instant::now());
        }
    }

    fn stop(&mut self, stage: &'static str) {
        if let Some(started) = self.started.take() {
            self.stages.push((stage, started.elapsed()));
        }
    }

    fn report(&self) {
        if !self.enabled {
            return;
        }
        for (stage, elapsed) in &self.stages {
            eprintln!(
                "grdfs: {stage} took {:.3}ms",
                elapsed.as_secs_f64() * 1000.0
            );
        }
    }
}
